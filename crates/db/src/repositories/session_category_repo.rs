//! Repository for the `session_categories` table.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::session_category::{CreateSessionCategory, SessionCategory};

const COLUMNS: &str = "id, name, description, created_at";

pub struct SessionCategoryRepo;

impl SessionCategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSessionCategory,
    ) -> Result<SessionCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO session_categories (name, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SessionCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SessionCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM session_categories WHERE id = $1");
        sqlx::query_as::<_, SessionCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<SessionCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM session_categories ORDER BY name ASC");
        sqlx::query_as::<_, SessionCategory>(&query)
            .fetch_all(pool)
            .await
    }
}
