use super::MatchId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Final score of a completed match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub team_a_score: u32,
    pub team_b_score: u32,
    /// Equal to either `team_a` or `team_b` of the owning match
    pub winner: String,
}

/// Match lifecycle. `Upcoming -> Completed` is the only transition and
/// a completed match always carries its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Completed { result: MatchResult },
}

impl MatchStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, MatchStatus::Completed { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "upcoming",
            MatchStatus::Completed { .. } => "completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// Team names, not ids
    pub team_a: String,
    pub team_b: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(flatten)]
    pub(crate) status: MatchStatus,
}

impl Match {
    pub(crate) fn scheduled(
        id: MatchId,
        team_a: String,
        team_b: String,
        date: String,
        time: String,
        location: String,
    ) -> Self {
        Self { id, team_a, team_b, date, time, location, status: MatchStatus::Upcoming }
    }

    pub fn status(&self) -> &MatchStatus {
        &self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn result(&self) -> Option<&MatchResult> {
        match &self.status {
            MatchStatus::Upcoming => None,
            MatchStatus::Completed { result } => Some(result),
        }
    }

    pub fn involves(&self, team_name: &str) -> bool {
        self.team_a == team_name || self.team_b == team_name
    }

    pub fn winner(&self) -> Option<&str> {
        self.result().map(|r| r.winner.as_str())
    }

    pub fn loser(&self) -> Option<&str> {
        let winner = self.winner()?;
        if winner == self.team_a {
            Some(&self.team_b)
        } else {
            Some(&self.team_a)
        }
    }

    /// Kickoff time, if `date` is `YYYY-MM-DD` and `time` is `HH:MM`.
    pub fn kickoff(&self) -> Option<NaiveDateTime> {
        let stamp = format!("{} {}", self.date.trim(), self.time.trim());
        NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M").ok()
    }
}
