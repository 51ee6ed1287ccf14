//! Repository for the `roles` table (seeded lookup data).

use sqlx::PgPool;

use palco_core::types::DbId;

use crate::models::role::Role;

pub struct RoleRepo;

impl RoleRepo {
    /// Resolve a role id to its name. Roles are seed data, so a missing
    /// row surfaces as `sqlx::Error::RowNotFound`.
    pub async fn resolve_name(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_one(pool)
            .await
    }

    /// Find a role by name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>("SELECT id, name, created_at FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
