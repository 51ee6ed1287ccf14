//! HTTP API for the self-tape audition platform.
//!
//! Public modules are exposed so integration tests can build the exact
//! router and middleware stack the production binary uses.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
