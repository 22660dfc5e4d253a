//! In-memory `CatalogStore` used by the unit tests.
//!
//! Mirrors the Postgres store's observable behavior: unordered maps per
//! entity, a plain list for association rows (so duplicate pairs are
//! representable), and id-ordered listing.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use catena_database::CatalogStore;
use catena_models::{
    Component, ComponentPatch, ComponentSupplier, NewComponent, NewLink, Product, Supplier,
};
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    components: HashMap<Uuid, Component>,
    suppliers: HashMap<Uuid, Supplier>,
    products: HashMap<Uuid, Product>,
    links: Vec<ComponentSupplier>,
    product_links: Vec<(Uuid, Uuid)>, // (product_id, component_id)
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn add_supplier(&self, name: &str) -> Supplier {
        let now = Utc::now();
        let supplier = Supplier {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: None,
            created_at: now,
            updated_at: now,
        };
        self.inner
            .write()
            .await
            .suppliers
            .insert(supplier.id, supplier.clone());
        supplier
    }

    pub async fn add_component(&self, name: &str) -> Component {
        let now = Utc::now();
        let component = Component {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        self.inner
            .write()
            .await
            .components
            .insert(component.id, component.clone());
        component
    }

    pub async fn add_product(&self, name: &str, component_id: Uuid) -> Product {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            created_at: now,
            updated_at: now,
        };
        let mut inner = self.inner.write().await;
        inner.product_links.push((product.id, component_id));
        inner.products.insert(product.id, product.clone());
        product
    }

    pub async fn component_count(&self) -> usize {
        self.inner.read().await.components.len()
    }

    pub async fn link_count(&self) -> usize {
        self.inner.read().await.links.len()
    }

    pub async fn pair_count(&self, supplier_id: Uuid, component_id: Uuid) -> usize {
        self.inner
            .read()
            .await
            .links
            .iter()
            .filter(|l| l.supplier_id == supplier_id && l.component_id == component_id)
            .count()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_components(&self) -> Result<Vec<Component>> {
        let mut components: Vec<Component> = self
            .inner
            .read()
            .await
            .components
            .values()
            .cloned()
            .collect();
        components.sort_by_key(|c| c.id);
        Ok(components)
    }

    async fn find_component(&self, id: Uuid) -> Result<Option<Component>> {
        Ok(self.inner.read().await.components.get(&id).cloned())
    }

    async fn insert_component(&self, new: NewComponent) -> Result<Component> {
        let now = Utc::now();
        let component = Component {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            created_at: now,
            updated_at: now,
        };
        self.inner
            .write()
            .await
            .components
            .insert(component.id, component.clone());
        Ok(component)
    }

    async fn update_component(
        &self,
        id: Uuid,
        patch: ComponentPatch,
    ) -> Result<Option<Component>> {
        let mut inner = self.inner.write().await;
        let Some(component) = inner.components.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            component.name = name;
        }
        if let Some(description) = patch.description {
            component.description = Some(description);
        }
        component.updated_at = Utc::now();
        Ok(Some(component.clone()))
    }

    async fn delete_component(&self, id: Uuid) -> Result<bool> {
        Ok(self.inner.write().await.components.remove(&id).is_some())
    }

    async fn find_supplier(&self, id: Uuid) -> Result<Option<Supplier>> {
        Ok(self.inner.read().await.suppliers.get(&id).cloned())
    }

    async fn suppliers_for_component(&self, component_id: Uuid) -> Result<Vec<Supplier>> {
        let inner = self.inner.read().await;
        Ok(inner
            .links
            .iter()
            .filter(|l| l.component_id == component_id)
            .filter_map(|l| inner.suppliers.get(&l.supplier_id).cloned())
            .collect())
    }

    async fn products_for_component(&self, component_id: Uuid) -> Result<Vec<Product>> {
        let inner = self.inner.read().await;
        Ok(inner
            .product_links
            .iter()
            .filter(|(_, linked)| *linked == component_id)
            .filter_map(|(product_id, _)| inner.products.get(product_id).cloned())
            .collect())
    }

    async fn insert_link(&self, link: NewLink) -> Result<ComponentSupplier> {
        let now = Utc::now();
        let row = ComponentSupplier {
            id: Uuid::new_v4(),
            supplier_id: link.supplier_id,
            component_id: link.component_id,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.links.push(row.clone());
        Ok(row)
    }

    async fn find_link(
        &self,
        supplier_id: Uuid,
        component_id: Uuid,
    ) -> Result<Option<ComponentSupplier>> {
        Ok(self
            .inner
            .read()
            .await
            .links
            .iter()
            .find(|l| l.supplier_id == supplier_id && l.component_id == component_id)
            .cloned())
    }

    async fn delete_link(&self, supplier_id: Uuid, component_id: Uuid) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.links.len();
        inner
            .links
            .retain(|l| !(l.supplier_id == supplier_id && l.component_id == component_id));
        Ok(inner.links.len() < before)
    }

    async fn delete_links_for_component(&self, component_id: Uuid) -> Result<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.links.len();
        inner.links.retain(|l| l.component_id != component_id);
        Ok((before - inner.links.len()) as u64)
    }
}
