//! Component domain models for the Catena catalog.
//!
//! A component is the owning side of both many-to-many relations in the
//! catalog: it may be linked to any number of suppliers and products.
//! Association rows live and die with their component.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::{Product, Supplier};

/// A catalog component as stored, including internal audit timestamps.
/// Timestamps never leave the service boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, Validate, PartialEq)]
pub struct Component {
    pub id: Uuid,
    #[validate(length(min = 1, message = "name must be provided"))]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a component. The store assigns id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct NewComponent {
    #[validate(length(min = 1, message = "name must be provided"))]
    pub name: String,
    pub description: Option<String>,
}

/// Partial update for a component: only present fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ComponentPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A component together with the entities reached through the two join
/// collections. The association rows themselves are never exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDetail {
    pub component: Component,
    pub suppliers: Vec<Supplier>,
    pub products: Vec<Product>,
}
