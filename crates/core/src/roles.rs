//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_roles_table.sql`.
//! Guests are simply unauthenticated requests and have no role row.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_TUTOR: &str = "tutor";
pub const ROLE_ACTOR: &str = "actor";
