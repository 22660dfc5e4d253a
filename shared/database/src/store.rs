//! Entity-store seam between the catalog core and PostgreSQL.
//!
//! The core services program against `CatalogStore`; the Postgres
//! implementation composes the per-entity repositories. Unit tests
//! substitute an in-memory implementation of the same trait.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use catena_models::{
    Component, ComponentPatch, ComponentSupplier, NewComponent, NewLink, Product, Supplier,
};

use crate::repositories::{
    AssociationRepository, ComponentRepository, ProductRepository, SupplierRepository,
};
use crate::PostgresPool;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All components, ascending by id.
    async fn list_components(&self) -> Result<Vec<Component>>;
    async fn find_component(&self, id: Uuid) -> Result<Option<Component>>;
    async fn insert_component(&self, new: NewComponent) -> Result<Component>;
    /// Applies only the present patch fields; `None` when no row matched.
    async fn update_component(&self, id: Uuid, patch: ComponentPatch)
        -> Result<Option<Component>>;
    /// `true` when a row was actually removed.
    async fn delete_component(&self, id: Uuid) -> Result<bool>;

    async fn find_supplier(&self, id: Uuid) -> Result<Option<Supplier>>;
    async fn suppliers_for_component(&self, component_id: Uuid) -> Result<Vec<Supplier>>;
    async fn products_for_component(&self, component_id: Uuid) -> Result<Vec<Product>>;

    /// Inserts unconditionally; pair-uniqueness checks belong to callers.
    async fn insert_link(&self, link: NewLink) -> Result<ComponentSupplier>;
    async fn find_link(
        &self,
        supplier_id: Uuid,
        component_id: Uuid,
    ) -> Result<Option<ComponentSupplier>>;
    async fn delete_link(&self, supplier_id: Uuid, component_id: Uuid) -> Result<bool>;
    async fn delete_links_for_component(&self, component_id: Uuid) -> Result<u64>;
}

/// PostgreSQL-backed catalog store.
pub struct PgCatalogStore {
    components: ComponentRepository,
    suppliers: SupplierRepository,
    products: ProductRepository,
    associations: AssociationRepository,
}

impl PgCatalogStore {
    pub fn new(pool: PostgresPool) -> Self {
        Self {
            components: ComponentRepository::new(pool.clone()),
            suppliers: SupplierRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            associations: AssociationRepository::new(pool),
        }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_components(&self) -> Result<Vec<Component>> {
        self.components.find_all().await
    }

    async fn find_component(&self, id: Uuid) -> Result<Option<Component>> {
        self.components.find_by_id(id).await
    }

    async fn insert_component(&self, new: NewComponent) -> Result<Component> {
        self.components.create(new).await
    }

    async fn update_component(
        &self,
        id: Uuid,
        patch: ComponentPatch,
    ) -> Result<Option<Component>> {
        self.components.update(id, patch).await
    }

    async fn delete_component(&self, id: Uuid) -> Result<bool> {
        self.components.delete(id).await
    }

    async fn find_supplier(&self, id: Uuid) -> Result<Option<Supplier>> {
        self.suppliers.find_by_id(id).await
    }

    async fn suppliers_for_component(&self, component_id: Uuid) -> Result<Vec<Supplier>> {
        self.suppliers.find_for_component(component_id).await
    }

    async fn products_for_component(&self, component_id: Uuid) -> Result<Vec<Product>> {
        self.products.find_for_component(component_id).await
    }

    async fn insert_link(&self, link: NewLink) -> Result<ComponentSupplier> {
        self.associations.create(link).await
    }

    async fn find_link(
        &self,
        supplier_id: Uuid,
        component_id: Uuid,
    ) -> Result<Option<ComponentSupplier>> {
        self.associations.find_pair(supplier_id, component_id).await
    }

    async fn delete_link(&self, supplier_id: Uuid, component_id: Uuid) -> Result<bool> {
        self.associations.delete_pair(supplier_id, component_id).await
    }

    async fn delete_links_for_component(&self, component_id: Uuid) -> Result<u64> {
        self.associations.delete_for_component(component_id).await
    }
}
