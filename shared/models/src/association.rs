//! Component–supplier association records.
//!
//! One row per link. A pair must never reference a nonexistent component
//! or supplier at the moment of creation; that invariant is enforced by
//! the callers, not by the storage schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row in the component_suppliers join collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ComponentSupplier {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub component_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a single association row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NewLink {
    pub supplier_id: Uuid,
    pub component_id: Uuid,
}
