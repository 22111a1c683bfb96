use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pharmacy_core::validation::{require_non_empty, validate_email};
use pharmacy_core::{DomainError, DomainResult, Entity, SupplierId, ValueObject};

const NAME_REQUIRED: &str = "Supplier name is required";

/// Contact information for a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl ValueObject for ContactInfo {}

/// Partial contact update: `None` keeps the current value, `Some` replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoUpdate {
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Input for `Supplier::create` (everything except identity and timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub is_active: bool,
}

/// Full persisted state of a supplier, used to rehydrate it from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProps {
    pub id: SupplierId,
    pub name: String,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entity: Supplier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    contact: ContactInfo,
    tax_id: Option<String>,
    notes: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Supplier {
    /// Factory: assigns a fresh id and sets both timestamps to now.
    pub fn create(input: NewSupplier) -> DomainResult<Self> {
        let now = Utc::now();
        Self::restore(SupplierProps {
            id: SupplierId::new(),
            name: input.name,
            contact: input.contact,
            tax_id: input.tax_id,
            notes: input.notes,
            is_active: input.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a supplier from persisted state, re-checking its invariants.
    pub fn restore(props: SupplierProps) -> DomainResult<Self> {
        require_non_empty(&props.name, NAME_REQUIRED)?;
        validate_email(props.contact.email.as_deref())?;

        Ok(Self {
            id: props.id,
            name: props.name,
            contact: props.contact,
            tax_id: props.tax_id,
            notes: props.notes,
            is_active: props.is_active,
            created_at: props.created_at,
            updated_at: props.updated_at,
        })
    }

    pub fn id_typed(&self) -> SupplierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn email(&self) -> Option<&str> {
        self.contact.email.as_deref()
    }

    pub fn tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    /// Apply a partial contact update.
    ///
    /// A non-empty email must be well formed; on failure nothing changes.
    pub fn update_contact_info(&mut self, update: ContactInfoUpdate) -> DomainResult<()> {
        if let Some(email) = update.email.as_deref() {
            validate_email(Some(email))?;
        }

        let ContactInfoUpdate {
            contact_name,
            email,
            phone,
            address,
        } = update;

        if contact_name.is_some() {
            self.contact.contact_name = contact_name;
        }
        if email.is_some() {
            self.contact.email = email;
        }
        if phone.is_some() {
            self.contact.phone = phone;
        }
        if address.is_some() {
            self.contact.address = address;
        }

        self.touch();
        Ok(())
    }

    /// Snapshot of the current state, suitable for persistence.
    pub fn to_props(&self) -> SupplierProps {
        SupplierProps {
            id: self.id,
            name: self.name.clone(),
            contact: self.contact.clone(),
            tax_id: self.tax_id.clone(),
            notes: self.notes.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

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

impl TryFrom<SupplierProps> for Supplier {
    type Error = DomainError;

    fn try_from(props: SupplierProps) -> Result<Self, Self::Error> {
        Self::restore(props)
    }
}
