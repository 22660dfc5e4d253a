//! Association Repository
//!
//! Row-level operations on the component_suppliers join table. Pair
//! uniqueness and referential integrity are the callers' checks; this
//! layer writes exactly what it is told to.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use catena_models::{ComponentSupplier, NewLink};

pub struct AssociationRepository {
    pool: PgPool,
}

impl AssociationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one association row
    pub async fn create(&self, link: NewLink) -> Result<ComponentSupplier> {
        let now = Utc::now();

        let row: LinkRow = sqlx::query_as(
            r#"
            INSERT INTO component_suppliers (id, supplier_id, component_id, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, supplier_id, component_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(link.supplier_id)
        .bind(link.component_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create association")?;

        Ok(row.into())
    }

    /// Find one row for an exact (supplier, component) pair
    pub async fn find_pair(
        &self,
        supplier_id: Uuid,
        component_id: Uuid,
    ) -> Result<Option<ComponentSupplier>> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, supplier_id, component_id, created_at, updated_at
            FROM component_suppliers
            WHERE supplier_id = $1 AND component_id = $2
            LIMIT 1
            "#,
        )
        .bind(supplier_id)
        .bind(component_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch association pair")?;

        Ok(row.map(|r| r.into()))
    }

    /// Delete every row for an exact (supplier, component) pair
    pub async fn delete_pair(&self, supplier_id: Uuid, component_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM component_suppliers WHERE supplier_id = $1 AND component_id = $2",
        )
        .bind(supplier_id)
        .bind(component_id)
        .execute(&self.pool)
        .await
        .context("Failed to delete association pair")?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete all rows owned by a component, returning how many went away
    pub async fn delete_for_component(&self, component_id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM component_suppliers WHERE component_id = $1")
            .bind(component_id)
            .execute(&self.pool)
            .await
            .context("Failed to delete associations for component")?;

        Ok(result.rows_affected())
    }
}

#[derive(Debug, FromRow)]
struct LinkRow {
    id: Uuid,
    supplier_id: Uuid,
    component_id: Uuid,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl From<LinkRow> for ComponentSupplier {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            supplier_id: row.supplier_id,
            component_id: row.component_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
