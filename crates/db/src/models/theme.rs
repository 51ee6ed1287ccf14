//! Audition theme model.
//!
//! Actors submit self-tapes against a theme. Themes can be windowed
//! (`opens_at` / `closes_at`) and are soft-deactivated, never deleted,
//! because submissions keep referencing them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use palco_core::types::{DbId, Timestamp};

/// A row from the `themes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Theme {
    pub id: DbId,
    pub title: String,
    pub brief: String,
    pub reference_url: Option<String>,
    pub is_active: bool,
    pub opens_at: Option<Timestamp>,
    pub closes_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Theme {
    /// Whether actors may submit against this theme at `now`: active and
    /// inside the open window when one is set. Must agree with the SQL
    /// predicate in `ThemeRepo::list_open`.
    pub fn is_open(&self, now: Timestamp) -> bool {
        self.is_active
            && self.opens_at.map_or(true, |opens| opens <= now)
            && self.closes_at.map_or(true, |closes| closes > now)
    }
}

/// DTO for creating a theme.
#[derive(Debug, Deserialize)]
pub struct CreateTheme {
    pub title: String,
    pub brief: String,
    pub reference_url: Option<String>,
    pub opens_at: Option<Timestamp>,
    pub closes_at: Option<Timestamp>,
}

/// DTO for partially updating a theme.
#[derive(Debug, Deserialize)]
pub struct UpdateTheme {
    pub title: Option<String>,
    pub brief: Option<String>,
    pub reference_url: Option<String>,
    pub opens_at: Option<Timestamp>,
    pub closes_at: Option<Timestamp>,
}
