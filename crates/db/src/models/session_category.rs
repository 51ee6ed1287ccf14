use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `session_categories` table (e.g. "Preparação de cena",
/// "Leitura fria").
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SessionCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a session category.
#[derive(Debug, Deserialize)]
pub struct CreateSessionCategory {
    pub name: String,
    pub description: Option<String>,
}
