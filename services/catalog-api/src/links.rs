//! Pairwise link manager.
//!
//! Creates and removes a single component–supplier association, with
//! existence and link-state checks ahead of each mutation. Per pair the
//! state machine is {Unlinked, Linked}: `link` moves Unlinked to Linked
//! and conflicts otherwise; `unlink` is the reverse.

use std::sync::Arc;

use catena_database::CatalogStore;
use catena_models::{ComponentSupplier, NewLink};
use catena_utils::{CatalogError, CatalogResult};
use uuid::Uuid;

use crate::validation;

#[derive(Clone)]
pub struct LinkService {
    store: Arc<dyn CatalogStore>,
}

impl LinkService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Link a supplier to a component. The pair must not already exist.
    pub async fn link(
        &self,
        supplier_id: Option<Uuid>,
        component_id: Option<Uuid>,
    ) -> CatalogResult<ComponentSupplier> {
        let supplier_id =
            supplier_id.ok_or_else(|| CatalogError::missing_identifier("supplier_id"))?;
        let component_id =
            component_id.ok_or_else(|| CatalogError::missing_identifier("component_id"))?;

        validation::ensure_supplier_exists(self.store.as_ref(), supplier_id).await?;
        validation::ensure_component_exists(self.store.as_ref(), component_id).await?;

        if self
            .store
            .find_link(supplier_id, component_id)
            .await?
            .is_some()
        {
            return Err(CatalogError::AlreadyLinked);
        }

        Ok(self
            .store
            .insert_link(NewLink {
                supplier_id,
                component_id,
            })
            .await?)
    }

    /// Remove an existing supplier link from a component.
    pub async fn unlink(&self, component_id: Uuid, supplier_id: Uuid) -> CatalogResult<()> {
        validation::ensure_supplier_exists(self.store.as_ref(), supplier_id).await?;
        validation::ensure_component_exists(self.store.as_ref(), component_id).await?;

        if self
            .store
            .find_link(supplier_id, component_id)
            .await?
            .is_none()
        {
            return Err(CatalogError::NotLinked);
        }

        self.store.delete_link(supplier_id, component_id).await?;
        Ok(())
    }
}
