use super::{Player, TeamId};
use serde::{Deserialize, Serialize};

/// Cumulative win/loss record. Only the result aggregator writes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    pub wins: u32,
    pub losses: u32,
}

impl TeamStats {
    pub fn matches_played(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Rounded win percentage; 0 before the first recorded match.
    pub fn win_rate(&self) -> u32 {
        let played = self.wins as u64 + self.losses as u64;
        if played == 0 {
            return 0;
        }
        // round half up
        ((self.wins as u64 * 200 + played) / (played * 2)) as u32
    }

    /// Record after one more match, or `None` when the played count would overflow.
    pub(crate) fn after_match(self, won: bool) -> Option<TeamStats> {
        self.wins.checked_add(self.losses)?.checked_add(1)?;
        Some(if won {
            TeamStats { wins: self.wins + 1, ..self }
        } else {
            TeamStats { losses: self.losses + 1, ..self }
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    /// Join key against `Match::team_a` / `Match::team_b`
    pub name: String,
    pub category: String,
    pub(crate) roster: Vec<Player>,
    pub(crate) stats: TeamStats,
}

impl Team {
    pub(crate) fn new(id: TeamId, name: String, category: String) -> Self {
        Self { id, name, category, roster: Vec::new(), stats: TeamStats::default() }
    }

    /// Players in the order they were added
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    pub fn stats(&self) -> TeamStats {
        self.stats
    }

    pub fn find_player(&self, player_id: u64) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == player_id)
    }
}
