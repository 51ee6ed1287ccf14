//! HTTP handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod events;
pub mod feedbacks;
pub mod sessions;
pub mod submissions;
pub mod subscriptions;
pub mod themes;
pub mod tutors;
