pub mod drill;
pub mod matches;
pub mod player;
pub mod team;

pub use drill::{Drill, DrillLevel, NewDrill, NewTrainingSession, TrainingSession};
pub use matches::{Match, MatchResult, MatchStatus};
pub use player::{Player, PlayerStats};
pub use team::{Team, TeamStats};

pub type TeamId = u64;
pub type PlayerId = u64;
pub type MatchId = u64;
pub type DrillId = u64;
pub type SessionId = u64;
