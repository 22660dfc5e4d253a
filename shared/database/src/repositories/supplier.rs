//! Supplier Repository
//!
//! Read-only access: suppliers are managed by an upstream system, this
//! service only resolves them for existence checks and display.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use catena_models::Supplier;

pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find supplier by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>> {
        let row: Option<SupplierRow> = sqlx::query_as(
            r#"
            SELECT id, name, address, created_at, updated_at
            FROM suppliers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch supplier by ID")?;

        Ok(row.map(|r| r.into()))
    }

    /// Find suppliers linked to a component
    pub async fn find_for_component(&self, component_id: Uuid) -> Result<Vec<Supplier>> {
        let rows: Vec<SupplierRow> = sqlx::query_as(
            r#"
            SELECT s.id, s.name, s.address, s.created_at, s.updated_at
            FROM suppliers s
            INNER JOIN component_suppliers cs ON cs.supplier_id = s.id
            WHERE cs.component_id = $1
            ORDER BY s.name
            "#,
        )
        .bind(component_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch suppliers for component")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

/// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct SupplierRow {
    id: Uuid,
    name: String,
    address: Option<String>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
