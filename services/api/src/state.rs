//! Application state shared across handlers

use chrono::FixedOffset;
use common::{session::SessionStore, users::UserRepository};

use crate::{
    mailer::Mailer,
    repositories::{
        CommunityRepository, EnrollmentRepository, EventRepository, HealthRepository,
        IntakeRepository,
    },
    roster::RosterCache,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub session_store: SessionStore,
    pub event_repository: EventRepository,
    pub enrollment_repository: EnrollmentRepository,
    pub health_repository: HealthRepository,
    pub community_repository: CommunityRepository,
    pub intake_repository: IntakeRepository,
    pub roster_cache: RosterCache,
    pub mailer: Mailer,
    /// Offset for event times and email timestamps
    pub utc_offset: FixedOffset,
}
