//! # volley_core - Volleyball club management core
//!
//! Teams and rosters, match scheduling and results, and the win/loss record
//! that completed matches feed into. Everything lives in an in-memory store;
//! a JSON request API fronts it for UI clients.
//!
//! ## Features
//! - Match lifecycle `upcoming -> completed`, recorded exactly once per match
//! - Team records updated atomically with the match result
//! - Snapshot reads that callers cannot use to reach back into the store
//! - Drill library and training sessions

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod results;
pub mod state;
pub mod store;

pub use api::{execute_club_json, ClubRequest, ClubResponse};
pub use config::ClubConfig;
pub use error::{ClubError, ErrorKind, Result};
pub use models::{
    Drill, DrillLevel, Match, MatchResult, MatchStatus, NewDrill, NewTrainingSession, Player,
    PlayerStats, Team, TeamStats, TrainingSession,
};
pub use query::TeamSummary;
pub use results::AppliedResult;
pub use state::SharedClub;
pub use store::{demo_state, ClubState, ClubStore};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    // Walkthrough of the documented scenarios against a fresh store
    #[test]
    fn test_season_walkthrough() {
        let mut store = ClubStore::new(ClubConfig::empty());

        let garuda = store.create_team("Garuda Volley", "Professional").unwrap();
        let m = store
            .create_match("Garuda Volley", "Nusantara Smashers", "2025-10-05", "15:00", "GOR Bhinneka")
            .unwrap();
        assert_eq!(m.status(), &MatchStatus::Upcoming);

        let done = store.record_result(m.id, 3, 1).unwrap();
        assert_eq!(done.winner(), Some("Garuda Volley"));
        assert_eq!(store.find_team(garuda.id).unwrap().stats().wins, 1);

        assert!(matches!(store.record_result(m.id, 3, 1), Err(ClubError::Validation(_))));

        let fresh = store.create_match("Garuda Volley", "Bandung Strikers", "", "", "").unwrap();
        assert!(matches!(store.record_result(fresh.id, 2, 2), Err(ClubError::Validation(_))));
        assert_eq!(store.find_match(fresh.id).unwrap().status(), &MatchStatus::Upcoming);

        assert!(matches!(
            store.add_player(garuda.id + 1000, "X", 9, "Setter"),
            Err(ClubError::NotFound { .. })
        ));
    }
}
