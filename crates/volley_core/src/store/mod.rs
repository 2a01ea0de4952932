//! Entity store
//!
//! Authoritative in-memory collections of teams, matches, drills and training
//! sessions. `ClubState` is the plain data; `ClubStore` owns it together with
//! the id sequence and enforces creation rules.

pub mod seed;

use crate::config::ClubConfig;
use crate::error::{ClubError, Result};
use crate::models::{
    Drill, Match, MatchId, NewDrill, NewTrainingSession, Player, Team, TeamId, TrainingSession,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

pub use seed::demo_state;

/// Store contents, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubState {
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub drills: Vec<Drill>,
    pub training_sessions: Vec<TrainingSession>,
}

impl ClubState {
    /// Largest identifier in use, across all collections
    pub fn max_id(&self) -> u64 {
        let team_ids = self.teams.iter().map(|t| t.id);
        let player_ids = self.teams.iter().flat_map(|t| t.roster.iter().map(|p| p.id));
        let match_ids = self.matches.iter().map(|m| m.id);
        let drill_ids = self.drills.iter().map(|d| d.id);
        let session_ids = self.training_sessions.iter().map(|s| s.id);

        team_ids
            .chain(player_ids)
            .chain(match_ids)
            .chain(drill_ids)
            .chain(session_ids)
            .max()
            .unwrap_or(0)
    }

    /// Check the invariants a loaded state must satisfy before a store takes it over.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for team in &self.teams {
            if team.name.trim().is_empty() {
                return Err(ClubError::validation(format!("Team {} has an empty name", team.id)));
            }
            if !names.insert(team.name.as_str()) {
                return Err(ClubError::validation(format!("Duplicate team name: {}", team.name)));
            }
            if team.stats.wins.checked_add(team.stats.losses).is_none() {
                return Err(ClubError::validation(format!(
                    "Team {} has more matches than can be counted",
                    team.id
                )));
            }
            for player in &team.roster {
                if player.stats.efficiency > 100 {
                    return Err(ClubError::validation(format!(
                        "Player {} efficiency {} is above 100",
                        player.id, player.stats.efficiency
                    )));
                }
            }
        }

        let mut ids = HashSet::new();
        let all_ids = self
            .teams
            .iter()
            .map(|t| t.id)
            .chain(self.teams.iter().flat_map(|t| t.roster.iter().map(|p| p.id)))
            .chain(self.matches.iter().map(|m| m.id))
            .chain(self.drills.iter().map(|d| d.id))
            .chain(self.training_sessions.iter().map(|s| s.id));
        for id in all_ids {
            if !ids.insert(id) {
                return Err(ClubError::validation(format!("Duplicate id: {}", id)));
            }
        }
        if ids.contains(&u64::MAX) {
            return Err(ClubError::validation("id space exhausted"));
        }

        for m in &self.matches {
            if m.team_a == m.team_b {
                return Err(ClubError::validation(format!(
                    "Match {} has the same team on both sides",
                    m.id
                )));
            }
            if let Some(result) = m.result() {
                let expected = match result.team_a_score.cmp(&result.team_b_score) {
                    std::cmp::Ordering::Greater => &m.team_a,
                    std::cmp::Ordering::Less => &m.team_b,
                    std::cmp::Ordering::Equal => {
                        return Err(ClubError::validation(format!(
                            "Match {} has a tied result",
                            m.id
                        )));
                    }
                };
                if &result.winner != expected {
                    return Err(ClubError::validation(format!(
                        "Match {} winner '{}' does not match the score",
                        m.id, result.winner
                    )));
                }
            }
        }

        Ok(())
    }
}

pub struct ClubStore {
    pub(crate) state: ClubState,
    pub(crate) config: ClubConfig,
    next_id: u64,
}

impl Default for ClubStore {
    fn default() -> Self {
        Self::new(ClubConfig::default())
    }
}

impl ClubStore {
    /// Create a store, preloaded with the demo club when the config asks for it.
    pub fn new(config: ClubConfig) -> Self {
        let state = if config.seed_demo_data { demo_state() } else { ClubState::default() };
        let next_id = config.first_id.max(state.max_id().saturating_add(1));
        Self { state, config, next_id }
    }

    /// Take over an existing state after checking it
    pub fn from_state(state: ClubState, config: ClubConfig) -> Result<Self> {
        state.validate()?;
        // validate rejects u64::MAX, so the increment cannot overflow
        let next_id = config.first_id.max(state.max_id() + 1);
        Ok(Self { state, config, next_id })
    }

    /// Current state, for inspection
    pub fn get_state(&self) -> &ClubState {
        &self.state
    }

    pub fn config(&self) -> &ClubConfig {
        &self.config
    }

    fn issue_id(&mut self) -> Result<u64> {
        let id = self.next_id;
        self.next_id =
            id.checked_add(1).ok_or_else(|| ClubError::validation("id space exhausted"))?;
        Ok(id)
    }

    // ========================
    // Teams
    // ========================

    pub fn create_team(&mut self, name: &str, category: &str) -> Result<Team> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClubError::validation("Team name is required"));
        }
        if self.find_team_by_name(name).is_some() {
            return Err(ClubError::validation(format!("Team name already in use: {}", name)));
        }

        let team = Team::new(self.issue_id()?, name.to_string(), category.trim().to_string());
        self.state.teams.push(team.clone());

        log::info!("Created team {} '{}'", team.id, team.name);
        Ok(team)
    }

    pub fn add_player(
        &mut self,
        team_id: TeamId,
        name: &str,
        number: u32,
        position: &str,
    ) -> Result<Player> {
        let name = name.trim();
        if !self.state.teams.iter().any(|t| t.id == team_id) {
            return Err(ClubError::not_found("Team", team_id));
        }
        if name.is_empty() {
            return Err(ClubError::validation("Player name is required"));
        }

        let player =
            Player::new(self.issue_id()?, name.to_string(), number, position.trim().to_string());
        let team = self
            .find_team_mut(team_id)
            .ok_or_else(|| ClubError::not_found("Team", team_id))?;
        team.roster.push(player.clone());

        log::debug!("Added player {} (#{}) to team {}", player.id, player.number, team_id);
        Ok(player)
    }

    pub fn find_team(&self, team_id: TeamId) -> Option<&Team> {
        self.state.teams.iter().find(|t| t.id == team_id)
    }

    pub fn find_team_by_name(&self, name: &str) -> Option<&Team> {
        self.state.teams.iter().find(|t| t.name == name)
    }

    pub(crate) fn find_team_mut(&mut self, team_id: TeamId) -> Option<&mut Team> {
        self.state.teams.iter_mut().find(|t| t.id == team_id)
    }

    // ========================
    // Matches
    // ========================

    pub fn create_match(
        &mut self,
        team_a: &str,
        team_b: &str,
        date: &str,
        time: &str,
        location: &str,
    ) -> Result<Match> {
        let (team_a, team_b) = (team_a.trim(), team_b.trim());
        if team_a.is_empty() || team_b.is_empty() {
            return Err(ClubError::validation("Both team names are required"));
        }
        if team_a == team_b {
            return Err(ClubError::validation(format!("A team cannot play itself: {}", team_a)));
        }

        let scheduled = Match::scheduled(
            self.issue_id()?,
            team_a.to_string(),
            team_b.to_string(),
            date.trim().to_string(),
            time.trim().to_string(),
            location.trim().to_string(),
        );

        if self.config.newest_matches_first {
            self.state.matches.insert(0, scheduled.clone());
        } else {
            self.state.matches.push(scheduled.clone());
        }

        log::info!(
            "Scheduled match {}: {} vs {} on {} {}",
            scheduled.id,
            scheduled.team_a,
            scheduled.team_b,
            scheduled.date,
            scheduled.time
        );
        Ok(scheduled)
    }

    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.state.matches.iter().find(|m| m.id == match_id)
    }

    pub(crate) fn match_index(&self, match_id: MatchId) -> Option<usize> {
        self.state.matches.iter().position(|m| m.id == match_id)
    }

    // ========================
    // Drills & training sessions
    // ========================

    pub fn add_drill(&mut self, drill: NewDrill) -> Result<Drill> {
        drill.validate()?;

        let drill = drill.into_drill(self.issue_id()?);
        self.state.drills.insert(0, drill.clone());

        log::debug!("Added drill {} '{}'", drill.id, drill.title);
        Ok(drill)
    }

    pub fn add_training_session(&mut self, session: NewTrainingSession) -> Result<TrainingSession> {
        session.validate()?;

        let session = session.into_session(self.issue_id()?);
        self.state.training_sessions.insert(0, session.clone());

        log::debug!("Scheduled training session {} on {}", session.id, session.date);
        Ok(session)
    }
}
