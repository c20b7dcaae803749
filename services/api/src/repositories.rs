//! Repositories for database operations
//!
//! Users and sessions live in `common`; everything else the API stores is
//! handled here.

pub mod community;
pub mod enrollment;
pub mod event;
pub mod health;
pub mod intake;

pub use community::CommunityRepository;
pub use enrollment::EnrollmentRepository;
pub use event::EventRepository;
pub use health::HealthRepository;
pub use intake::IntakeRepository;
