use super::{DrillId, SessionId};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Drill difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drill {
    pub id: DrillId,
    pub title: String,
    pub category: String,
    pub level: DrillLevel,
    pub description: String,
    /// Minutes
    pub duration: u32,
    /// Suggested head count, free text ("6-8 pemain")
    pub players: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
}

/// Structured drill description, as produced by the drill generator or typed in by a coach
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewDrill {
    #[validate(length(min = 1, message = "drill title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "drill category is required"))]
    pub category: String,
    pub level: DrillLevel,
    #[validate(length(min = 1, message = "drill description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "drill duration must be at least one minute"))]
    pub duration: u32,
    #[validate(length(min = 1, message = "drill player count is required"))]
    pub players: String,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl NewDrill {
    pub(crate) fn into_drill(self, id: DrillId) -> Drill {
        Drill {
            id,
            title: self.title,
            category: self.category,
            level: self.level,
            description: self.description,
            duration: self.duration,
            players: self.players,
            steps: self.steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    pub id: SessionId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewTrainingSession {
    #[validate(length(min = 1, message = "session title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "session date is required"))]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
}

impl NewTrainingSession {
    pub(crate) fn into_session(self, id: SessionId) -> TrainingSession {
        TrainingSession {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
        }
    }
}
