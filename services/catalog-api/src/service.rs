//! Component lifecycle manager.
//!
//! Orchestrates component CRUD plus the supplier-association side
//! effects. Supplier links follow replace semantics on update: the
//! stored set is dropped and rebuilt from the request on every call, so
//! a request without `supplier_ids` clears every link the component has.

use std::sync::Arc;

use catena_database::CatalogStore;
use catena_models::{Component, ComponentDetail, ComponentPatch, NewComponent, NewLink};
use catena_utils::{CatalogError, CatalogResult};
use futures::future;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::validation;

#[derive(Clone)]
pub struct ComponentService {
    store: Arc<dyn CatalogStore>,
}

impl ComponentService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// All components, ascending by id.
    pub async fn list(&self) -> CatalogResult<Vec<Component>> {
        Ok(self.store.list_components().await?)
    }

    /// One component with its linked suppliers and products.
    pub async fn get(&self, id: Uuid) -> CatalogResult<ComponentDetail> {
        let component = validation::ensure_component_exists(self.store.as_ref(), id).await?;
        let suppliers = self.store.suppliers_for_component(id).await?;
        let products = self.store.products_for_component(id).await?;

        Ok(ComponentDetail {
            component,
            suppliers,
            products,
        })
    }

    /// Create a component, optionally linking it to suppliers.
    ///
    /// `supplier_ids` is keyed off field presence: `Some(vec![])` still
    /// runs the (trivially passing) validation and creates no links,
    /// while `None` skips the association step entirely.
    pub async fn create(
        &self,
        name: Option<String>,
        description: Option<String>,
        supplier_ids: Option<Vec<Uuid>>,
    ) -> CatalogResult<Component> {
        let name = name.ok_or_else(|| CatalogError::validation("name"))?;
        let new = NewComponent { name, description };
        new.validate()
            .map_err(|_| CatalogError::validation("name"))?;

        if let Some(ids) = &supplier_ids {
            validation::validate_suppliers_exist(self.store.as_ref(), ids).await?;
        }

        let component = self.store.insert_component(new).await?;

        if let Some(ids) = &supplier_ids {
            self.create_links(component.id, ids).await?;
        }

        debug!(component_id = %component.id, "component created");
        Ok(component)
    }

    /// Patch a component and replace its supplier links.
    ///
    /// Returns the record as read before the patch was applied; callers
    /// depend on seeing the pre-update state.
    pub async fn update(
        &self,
        id: Uuid,
        patch: ComponentPatch,
        supplier_ids: Option<Vec<Uuid>>,
    ) -> CatalogResult<Component> {
        let snapshot = validation::ensure_component_exists(self.store.as_ref(), id).await?;

        if let Some(ids) = &supplier_ids {
            validation::validate_suppliers_exist(self.store.as_ref(), ids).await?;
        }

        self.store.update_component(id, patch).await?;
        self.store.delete_links_for_component(id).await?;

        if let Some(ids) = &supplier_ids {
            self.create_links(id, ids).await?;
        }

        Ok(snapshot)
    }

    /// Delete a component and every supplier link it owns.
    pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        let deleted = self.store.delete_component(id).await?;
        if !deleted {
            return Err(CatalogError::not_found("component", id));
        }

        self.store.delete_links_for_component(id).await?;
        debug!(component_id = %id, "component deleted");
        Ok(())
    }

    /// Insert one association row per id as a concurrent batch.
    ///
    /// The batch is not atomic: a failure partway through leaves the
    /// rows already written in place, and the first error is surfaced.
    async fn create_links(&self, component_id: Uuid, supplier_ids: &[Uuid]) -> CatalogResult<()> {
        let writes = supplier_ids.iter().map(|supplier_id| {
            self.store.insert_link(NewLink {
                supplier_id: *supplier_id,
                component_id,
            })
        });

        for result in future::join_all(writes).await {
            result?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;

    #[tokio::test]
    async fn create_without_supplier_ids_creates_no_links() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, None)
            .await
            .unwrap();

        assert_eq!(component.name, "Bolt");
        assert_eq!(store.component_count().await, 1);
        assert_eq!(store.link_count().await, 0);
    }

    #[tokio::test]
    async fn create_links_every_supplied_id() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let s2 = store.add_supplier("Bolt & Co").await;
        let service = ComponentService::new(store.clone());

        let component = service
            .create(
                Some("Bolt".to_string()),
                Some("M8 hex bolt".to_string()),
                Some(vec![s1.id, s2.id]),
            )
            .await
            .unwrap();

        assert_eq!(store.link_count().await, 2);
        assert_eq!(store.pair_count(s1.id, component.id).await, 1);
        assert_eq!(store.pair_count(s2.id, component.id).await, 1);
    }

    #[tokio::test]
    async fn duplicate_ids_in_request_create_duplicate_rows() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, Some(vec![s1.id, s1.id]))
            .await
            .unwrap();

        assert_eq!(store.pair_count(s1.id, component.id).await, 2);
    }

    #[tokio::test]
    async fn unknown_supplier_id_aborts_before_any_write() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let service = ComponentService::new(store.clone());

        let result = service
            .create(
                Some("Bolt".to_string()),
                None,
                Some(vec![s1.id, Uuid::new_v4()]),
            )
            .await;

        assert!(matches!(result, Err(CatalogError::AssociationNotFound)));
        assert_eq!(store.component_count().await, 0);
        assert_eq!(store.link_count().await, 0);
    }

    #[tokio::test]
    async fn missing_or_empty_name_is_rejected() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        let missing = service.create(None, None, None).await;
        assert!(matches!(missing, Err(CatalogError::Validation { .. })));

        let empty = service.create(Some(String::new()), None, None).await;
        assert!(matches!(empty, Err(CatalogError::Validation { .. })));

        assert_eq!(store.component_count().await, 0);
    }

    #[tokio::test]
    async fn empty_supplier_list_is_validated_and_creates_nothing() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        service
            .create(Some("Bolt".to_string()), None, Some(Vec::new()))
            .await
            .unwrap();

        assert_eq!(store.component_count().await, 1);
        assert_eq!(store.link_count().await, 0);
    }

    #[tokio::test]
    async fn update_replaces_the_supplier_set() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let s2 = store.add_supplier("Bolt & Co").await;
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, Some(vec![s1.id]))
            .await
            .unwrap();

        service
            .update(component.id, ComponentPatch::default(), Some(vec![s2.id]))
            .await
            .unwrap();

        assert_eq!(store.pair_count(s1.id, component.id).await, 0);
        assert_eq!(store.pair_count(s2.id, component.id).await, 1);
    }

    #[tokio::test]
    async fn update_without_supplier_field_clears_all_links() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let s2 = store.add_supplier("Bolt & Co").await;
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, Some(vec![s1.id, s2.id]))
            .await
            .unwrap();
        assert_eq!(store.link_count().await, 2);

        let patch = ComponentPatch {
            name: Some("Hex bolt".to_string()),
            description: None,
        };
        service.update(component.id, patch, None).await.unwrap();

        assert_eq!(store.link_count().await, 0);
        let detail = service.get(component.id).await.unwrap();
        assert_eq!(detail.component.name, "Hex bolt");
    }

    #[tokio::test]
    async fn update_returns_pre_update_snapshot() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, None)
            .await
            .unwrap();

        let patch = ComponentPatch {
            name: Some("Hex bolt".to_string()),
            description: None,
        };
        let snapshot = service.update(component.id, patch, None).await.unwrap();

        assert_eq!(snapshot.name, "Bolt");
        let stored = service.get(component.id).await.unwrap();
        assert_eq!(stored.component.name, "Hex bolt");
    }

    #[tokio::test]
    async fn update_with_unknown_supplier_leaves_everything_untouched() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, Some(vec![s1.id]))
            .await
            .unwrap();

        let patch = ComponentPatch {
            name: Some("Hex bolt".to_string()),
            description: None,
        };
        let result = service
            .update(component.id, patch, Some(vec![Uuid::new_v4()]))
            .await;

        assert!(matches!(result, Err(CatalogError::AssociationNotFound)));
        let detail = service.get(component.id).await.unwrap();
        assert_eq!(detail.component.name, "Bolt");
        assert_eq!(store.pair_count(s1.id, component.id).await, 1);
    }

    #[tokio::test]
    async fn update_unknown_component_is_not_found() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        let result = service
            .update(Uuid::new_v4(), ComponentPatch::default(), None)
            .await;
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }

    #[tokio::test]
    async fn delete_removes_component_and_links() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, Some(vec![s1.id]))
            .await
            .unwrap();

        service.delete(component.id).await.unwrap();

        assert_eq!(store.component_count().await, 0);
        assert_eq!(store.link_count().await, 0);
    }

    #[tokio::test]
    async fn delete_unknown_component_is_not_found() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        let result = service.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }

    #[tokio::test]
    async fn get_returns_linked_suppliers_and_products() {
        let store = MemoryStore::new();
        let s1 = store.add_supplier("Acme Fasteners").await;
        let service = ComponentService::new(store.clone());

        let component = service
            .create(Some("Bolt".to_string()), None, Some(vec![s1.id]))
            .await
            .unwrap();
        store.add_product("Gearbox", component.id).await;

        let detail = service.get(component.id).await.unwrap();
        assert_eq!(detail.suppliers.len(), 1);
        assert_eq!(detail.suppliers[0].name, "Acme Fasteners");
        assert_eq!(detail.products.len(), 1);
        assert_eq!(detail.products[0].name, "Gearbox");
    }

    #[tokio::test]
    async fn get_unknown_component_is_not_found() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        let result = service.get(Uuid::new_v4()).await;
        assert!(matches!(
            result,
            Err(CatalogError::NotFound { resource, .. }) if resource == "component"
        ));
    }

    #[tokio::test]
    async fn list_is_ordered_by_ascending_id() {
        let store = MemoryStore::new();
        let service = ComponentService::new(store.clone());

        for name in ["Bolt", "Washer", "Nut"] {
            service.create(Some(name.to_string()), None, None).await.unwrap();
        }

        let components = service.list().await.unwrap();
        assert_eq!(components.len(), 3);
        assert!(components.windows(2).all(|w| w[0].id <= w[1].id));
    }
}
