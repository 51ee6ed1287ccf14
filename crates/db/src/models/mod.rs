//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod assignment_event;
pub mod feedback;
pub mod live_event;
pub mod live_session;
pub mod role;
pub mod session;
pub mod session_category;
pub mod submission;
pub mod subscription;
pub mod theme;
pub mod user;
