//! Association validator.
//!
//! Existence checks performed before any join-table mutation. Batch
//! lookups run concurrently and the verdict is made only after every
//! lookup has completed.

use catena_database::CatalogStore;
use catena_models::{Component, Supplier};
use catena_utils::{CatalogError, CatalogResult};
use futures::future;
use uuid::Uuid;

/// Check that every supplier id in `ids` exists.
///
/// Lookups are issued concurrently; duplicates in the input are looked
/// up once per occurrence. Read-only: no rows are touched on any path.
pub async fn validate_suppliers_exist(
    store: &dyn CatalogStore,
    ids: &[Uuid],
) -> CatalogResult<()> {
    let lookups = ids.iter().map(|id| store.find_supplier(*id));
    let results = future::join_all(lookups).await;

    let mut missing = false;
    for result in results {
        if result?.is_none() {
            missing = true;
        }
    }

    if missing {
        return Err(CatalogError::AssociationNotFound);
    }

    Ok(())
}

/// Resolve a single supplier id or fail with `NotFound`.
pub async fn ensure_supplier_exists(
    store: &dyn CatalogStore,
    id: Uuid,
) -> CatalogResult<Supplier> {
    store
        .find_supplier(id)
        .await?
        .ok_or_else(|| CatalogError::not_found("supplier", id))
}

/// Resolve a single component id or fail with `NotFound`.
pub async fn ensure_component_exists(
    store: &dyn CatalogStore,
    id: Uuid,
) -> CatalogResult<Component> {
    store
        .find_component(id)
        .await?
        .ok_or_else(|| CatalogError::not_found("component", id))
}
