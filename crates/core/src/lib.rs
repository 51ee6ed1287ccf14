//! Pure domain logic for the self-tape audition platform.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API, and any future CLI tooling. Everything here
//! is deterministic and I/O-free.

pub mod assignment;
pub mod deadline;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
