//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_event_repo;
pub mod feedback_repo;
pub mod live_event_repo;
pub mod live_session_repo;
pub mod role_repo;
pub mod session_category_repo;
pub mod session_repo;
pub mod submission_repo;
pub mod subscription_repo;
pub mod theme_repo;
pub mod user_repo;

pub use assignment_event_repo::AssignmentEventRepo;
pub use feedback_repo::FeedbackRepo;
pub use live_event_repo::LiveEventRepo;
pub use live_session_repo::LiveSessionRepo;
pub use role_repo::RoleRepo;
pub use session_category_repo::SessionCategoryRepo;
pub use session_repo::SessionRepo;
pub use submission_repo::SubmissionRepo;
pub use subscription_repo::SubscriptionRepo;
pub use theme_repo::ThemeRepo;
pub use user_repo::UserRepo;
