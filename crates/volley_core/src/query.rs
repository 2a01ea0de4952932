//! Read-only accessors
//!
//! Every accessor returns owned copies; nothing handed out here can reach back
//! into the store.

use crate::error::{ClubError, Result};
use crate::models::{Drill, Match, Player, Team, TeamId, TrainingSession};
use crate::store::ClubStore;
use serde::Serialize;

/// Dashboard view of one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub team: Team,
    pub matches_played: u32,
    pub wins: u32,
    pub losses: u32,
    /// Rounded percentage
    pub win_rate: u32,
    pub upcoming: Vec<Match>,
    pub next_match: Option<Match>,
}

impl ClubStore {
    pub fn list_teams(&self) -> Vec<Team> {
        self.state.teams.clone()
    }

    pub fn list_matches(&self) -> Vec<Match> {
        self.state.matches.clone()
    }

    pub fn list_drills(&self) -> Vec<Drill> {
        self.state.drills.clone()
    }

    pub fn list_training_sessions(&self) -> Vec<TrainingSession> {
        self.state.training_sessions.clone()
    }

    pub fn upcoming_matches(&self) -> Vec<Match> {
        self.state.matches.iter().filter(|m| !m.is_completed()).cloned().collect()
    }

    pub fn completed_matches(&self) -> Vec<Match> {
        self.state.matches.iter().filter(|m| m.is_completed()).cloned().collect()
    }

    /// Earliest upcoming match for a team. Matches without a parseable
    /// kickoff sort after dated ones, in store order.
    pub fn next_match_for(&self, team_name: &str) -> Option<Match> {
        self.state
            .matches
            .iter()
            .filter(|m| !m.is_completed() && m.involves(team_name))
            .min_by_key(|m| {
                let kickoff = m.kickoff();
                (kickoff.is_none(), kickoff)
            })
            .cloned()
    }

    pub fn team_summary(&self, team_id: TeamId) -> Result<TeamSummary> {
        let team = self.find_team(team_id).ok_or_else(|| ClubError::not_found("Team", team_id))?;
        let stats = team.stats();

        let upcoming: Vec<Match> = self
            .state
            .matches
            .iter()
            .filter(|m| !m.is_completed() && m.involves(&team.name))
            .cloned()
            .collect();

        Ok(TeamSummary {
            matches_played: stats.matches_played(),
            wins: stats.wins,
            losses: stats.losses,
            win_rate: stats.win_rate(),
            next_match: self.next_match_for(&team.name),
            upcoming,
            team: team.clone(),
        })
    }

    /// Roster ordered by total points, highest first
    pub fn player_leaderboard(&self, team_id: TeamId) -> Result<Vec<Player>> {
        let team = self.find_team(team_id).ok_or_else(|| ClubError::not_found("Team", team_id))?;

        let mut players = team.roster().to_vec();
        players.sort_by(|a, b| b.stats.total_points.cmp(&a.stats.total_points));
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClubConfig;

    fn demo_store() -> ClubStore {
        ClubStore::new(ClubConfig::default())
    }

    #[test]
    fn test_reads_are_repeatable() {
        let store = demo_store();
        assert_eq!(store.list_teams(), store.list_teams());
        assert_eq!(store.list_matches(), store.list_matches());
        assert_eq!(store.list_drills(), store.list_drills());
        assert_eq!(store.list_training_sessions(), store.list_training_sessions());
    }

    #[test]
    fn test_snapshot_mutation_does_not_leak() {
        let store = demo_store();

        let mut teams = store.list_teams();
        teams[0].name = "Renamed".to_string();
        teams[0].roster.clear();
        teams.clear();

        let mut matches = store.list_matches();
        matches[0].location = "Elsewhere".to_string();

        let mut drills = store.list_drills();
        drills[0].steps.clear();

        let fresh = store.list_teams();
        assert_eq!(fresh[0].name, "Garuda Volley");
        assert_eq!(fresh[0].roster().len(), 4);
        assert_eq!(store.list_matches()[0].location, "GOR Bhinneka");
        assert_eq!(store.list_drills()[0].steps.len(), 5);
    }

    #[test]
    fn test_upcoming_and_completed_partition() {
        let store = demo_store();
        let upcoming = store.upcoming_matches();
        let completed = store.completed_matches();

        assert_eq!(upcoming.len() + completed.len(), store.list_matches().len());
        assert!(upcoming.iter().all(|m| m.result().is_none()));
        assert!(completed.iter().all(|m| m.result().is_some()));
    }

    #[test]
    fn test_next_match_prefers_earliest_kickoff() {
        let mut store = demo_store();
        // Scheduled last but sorts first by date
        let early = store
            .create_match("Garuda Volley", "Medan Eagles", "2025-10-01", "09:00", "GOR Medan")
            .unwrap();
        store.create_match("Garuda Volley", "Bali Waves", "sometime", "", "").unwrap();

        let next = store.next_match_for("Garuda Volley").unwrap();
        assert_eq!(next.id, early.id);
        assert!(store.next_match_for("Nobody").is_none());
    }

    #[test]
    fn test_team_summary() {
        let mut store = demo_store();
        let garuda_id = store.find_team_by_name("Garuda Volley").unwrap().id;

        let summary = store.team_summary(garuda_id).unwrap();
        assert_eq!(summary.matches_played, 24);
        assert_eq!(summary.win_rate, 75);
        assert_eq!(summary.upcoming.len(), 2);
        assert_eq!(summary.next_match.unwrap().team_b, "Nusantara Smashers");

        let next = store.upcoming_matches()[0].id;
        store.record_result(next, 0, 3).unwrap();
        let summary = store.team_summary(garuda_id).unwrap();
        assert_eq!(summary.matches_played, 25);
        assert_eq!(summary.upcoming.len(), 1);

        assert!(matches!(store.team_summary(9999), Err(ClubError::NotFound { .. })));
    }

    #[test]
    fn test_player_leaderboard() {
        let store = demo_store();
        let garuda_id = store.find_team_by_name("Garuda Volley").unwrap().id;

        let board = store.player_leaderboard(garuda_id).unwrap();
        let names: Vec<&str> = board.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Budi Santoso", "Dewi Anggraini", "Ahmad Rizki", "Citra Lestari"]);

        // Roster order itself is untouched
        let roster = store.find_team(garuda_id).unwrap().roster();
        assert_eq!(roster[0].name, "Ahmad Rizki");
    }

    #[test]
    fn test_leaderboard_ties_keep_roster_order() {
        let mut store = ClubStore::new(ClubConfig::empty());
        let team = store.create_team("Rookies", "Youth").unwrap();
        store.add_player(team.id, "First", 1, "Setter").unwrap();
        store.add_player(team.id, "Second", 2, "Libero").unwrap();

        let board = store.player_leaderboard(team.id).unwrap();
        assert_eq!(board[0].name, "First");
        assert_eq!(board[1].name, "Second");
    }
}
