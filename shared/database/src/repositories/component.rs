//! Component Repository
//!
//! CRUD operations for component records.
//! Uses runtime SQL queries (unchecked) to avoid requiring DATABASE_URL at compile time.

use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use catena_models::{Component, ComponentPatch, NewComponent};

pub struct ComponentRepository {
    pool: PgPool,
}

impl ComponentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find component by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Component>> {
        let row: Option<ComponentRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM components
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch component by ID")?;

        Ok(row.map(|r| r.into()))
    }

    /// Find all components, ascending by id
    pub async fn find_all(&self) -> Result<Vec<Component>> {
        let rows: Vec<ComponentRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM components
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch all components")?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Create new component
    pub async fn create(&self, new: NewComponent) -> Result<Component> {
        let now = Utc::now();

        let row: ComponentRow = sqlx::query_as(
            r#"
            INSERT INTO components (id, name, description, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create component")?;

        Ok(row.into())
    }

    /// Apply a partial update; absent fields keep their stored values.
    pub async fn update(&self, id: Uuid, patch: ComponentPatch) -> Result<Option<Component>> {
        let row: Option<ComponentRow> = sqlx::query_as(
            r#"
            UPDATE components SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                updated_at = $4
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(&patch.description)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update component")?;

        Ok(row.map(|r| r.into()))
    }

    /// Delete component
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM components WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete component")?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Debug, FromRow)]
struct ComponentRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: chrono::DateTime<Utc>,
    updated_at: chrono::DateTime<Utc>,
}

impl From<ComponentRow> for Component {
    fn from(row: ComponentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
