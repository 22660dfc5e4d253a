//! Product Repository
//!
//! Products are a read-only association target; the only query this
//! service needs is the reverse lookup through product_components.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use catena_models::Product;

pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find products that use a component
    pub async fn find_for_component(&self, component_id: Uuid) -> Result<Vec<Product>> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.name, p.description, p.created_at, p.updated_at
            FROM products p
            INNER JOIN product_components pc ON pc.product_id = p.id
            WHERE pc.component_id = $1
            ORDER BY p.name
            "#,
        )
        .bind(component_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch products for component")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
