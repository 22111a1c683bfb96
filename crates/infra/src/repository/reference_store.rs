use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use pharmacy_catalog::{CategoryLookup, RepositoryError, RepositoryResult, SupplierLookup};
use pharmacy_core::{CategoryId, Entity, SupplierId};
use pharmacy_parties::Supplier;
use pharmacy_products::Category;

/// Keyed upsert store for reference data (categories, suppliers).
pub trait ReferenceStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> RepositoryResult<Option<V>>;
    fn upsert(&self, value: V) -> RepositoryResult<()>;
    fn list(&self) -> RepositoryResult<Vec<V>>;
}

impl<K, V, S> ReferenceStore<K, V> for Arc<S>
where
    S: ReferenceStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> RepositoryResult<Option<V>> {
        (**self).get(key)
    }

    fn upsert(&self, value: V) -> RepositoryResult<()> {
        (**self).upsert(value)
    }

    fn list(&self) -> RepositoryResult<Vec<V>> {
        (**self).list()
    }
}

/// In-memory store keyed by entity id, for tests/dev.
#[derive(Debug)]
pub struct InMemoryReferenceStore<V: Entity> {
    inner: RwLock<HashMap<V::Id, V>>,
}

pub type InMemoryCategoryStore = InMemoryReferenceStore<Category>;
pub type InMemorySupplierStore = InMemoryReferenceStore<Supplier>;

impl<V: Entity> InMemoryReferenceStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<V: Entity> Default for InMemoryReferenceStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ReferenceStore<V::Id, V> for InMemoryReferenceStore<V>
where
    V: Entity + Clone + Send + Sync + 'static,
    V::Id: Ord + Send + Sync + 'static,
{
    fn get(&self, key: &V::Id) -> RepositoryResult<Option<V>> {
        let map = self.inner.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    fn upsert(&self, value: V) -> RepositoryResult<()> {
        let mut map = self.inner.write().map_err(|_| RepositoryError::LockPoisoned)?;
        map.insert(value.id().clone(), value);
        Ok(())
    }

    /// Ordered by id, which for UUIDv7 ids is creation order.
    fn list(&self) -> RepositoryResult<Vec<V>> {
        let map = self.inner.read().map_err(|_| RepositoryError::LockPoisoned)?;
        let mut values: Vec<V> = map.values().cloned().collect();
        values.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(values)
    }
}

#[async_trait]
impl CategoryLookup for InMemoryCategoryStore {
    async fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        self.get(&id)
    }
}

#[async_trait]
impl SupplierLookup for InMemorySupplierStore {
    async fn get_supplier_by_id(&self, id: SupplierId) -> RepositoryResult<Option<Supplier>> {
        self.get(&id)
    }
}
