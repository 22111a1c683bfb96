use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmacy_core::validation::require_non_empty;
use pharmacy_core::{CategoryId, DomainError, DomainResult, Entity};

const NAME_REQUIRED: &str = "Category name is required";

/// Input for `Category::create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Parent category. Weak reference: existence is not checked here.
    #[serde(default)]
    pub parent_id: Option<CategoryId>,
}

/// Full persisted state of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProps {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entity: Category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    parent_id: Option<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Category {
    pub fn create(input: NewCategory) -> DomainResult<Self> {
        let now = Utc::now();
        Self::restore(CategoryProps {
            id: CategoryId::new(),
            name: input.name,
            description: input.description,
            parent_id: input.parent_id,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn restore(props: CategoryProps) -> DomainResult<Self> {
        require_non_empty(&props.name, NAME_REQUIRED)?;

        Ok(Self {
            id: props.id,
            name: props.name,
            description: props.description,
            parent_id: props.parent_id,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parent_id(&self) -> Option<CategoryId> {
        self.parent_id
    }

    pub fn update_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        require_non_empty(&name, NAME_REQUIRED)?;
        self.name = name;
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn to_props(&self) -> CategoryProps {
        CategoryProps {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            parent_id: self.parent_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl TryFrom<CategoryProps> for Category {
    type Error = DomainError;

    fn try_from(props: CategoryProps) -> Result<Self, Self::Error> {
        Self::restore(props)
    }
}
