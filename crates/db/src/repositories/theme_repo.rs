//! Repository for the `themes` table.

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::theme::{CreateTheme, Theme, UpdateTheme};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, brief, reference_url, is_active, opens_at, closes_at, \
                        created_at, updated_at";

/// Provides CRUD operations for audition themes.
pub struct ThemeRepo;

impl ThemeRepo {
    /// Insert a new theme, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTheme) -> Result<Theme, sqlx::Error> {
        let query = format!(
            "INSERT INTO themes (title, brief, reference_url, opens_at, closes_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(&input.title)
            .bind(&input.brief)
            .bind(&input.reference_url)
            .bind(input.opens_at)
            .bind(input.closes_at)
            .fetch_one(pool)
            .await
    }

    /// Find a theme by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes WHERE id = $1");
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every theme, newest first (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM themes ORDER BY created_at DESC");
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }

    /// List themes actors may currently submit against: active and inside
    /// their open window (when one is set).
    pub async fn list_open(pool: &PgPool) -> Result<Vec<Theme>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM themes
             WHERE is_active = true
               AND (opens_at IS NULL OR opens_at <= NOW())
               AND (closes_at IS NULL OR closes_at > NOW())
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Theme>(&query).fetch_all(pool).await
    }

    /// Partially update a theme. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTheme,
    ) -> Result<Option<Theme>, sqlx::Error> {
        let query = format!(
            "UPDATE themes SET
                title = COALESCE($2, title),
                brief = COALESCE($3, brief),
                reference_url = COALESCE($4, reference_url),
                opens_at = COALESCE($5, opens_at),
                closes_at = COALESCE($6, closes_at),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Theme>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.brief)
            .bind(&input.reference_url)
            .bind(input.opens_at)
            .bind(input.closes_at)
            .fetch_optional(pool)
            .await
    }

    /// Soft-deactivate a theme. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE themes SET is_active = false, updated_at = NOW()
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
