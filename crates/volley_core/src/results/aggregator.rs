use crate::error::{ClubError, Result};
use crate::models::{Team, TeamId, TeamStats};
use serde::Serialize;

/// Which sides of a completed match were applied to a registered team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppliedResult {
    pub team_a: Option<TeamId>,
    pub team_b: Option<TeamId>,
}

impl AppliedResult {
    pub fn resolved_count(&self) -> usize {
        self.team_a.is_some() as usize + self.team_b.is_some() as usize
    }
}

/// Apply one completed match to the win/loss counters of both teams.
///
/// Teams are resolved by exact name. A name with no registered team (an
/// outside opponent) is skipped. Both new records are computed before either
/// is written, so an overflow leaves every team unchanged. Must only be called
/// once per completed match, from `ClubStore::record_result`.
pub(crate) fn apply_result(
    teams: &mut [Team],
    team_a: &str,
    team_b: &str,
    winner: &str,
) -> Result<AppliedResult> {
    let side_a = resolve_side(teams, team_a, winner)?;
    let side_b = resolve_side(teams, team_b, winner)?;

    for (index, stats) in side_a.iter().chain(side_b.iter()) {
        teams[*index].stats = *stats;
    }

    Ok(AppliedResult {
        team_a: side_a.map(|(index, _)| teams[index].id),
        team_b: side_b.map(|(index, _)| teams[index].id),
    })
}

fn resolve_side(teams: &[Team], name: &str, winner: &str) -> Result<Option<(usize, TeamStats)>> {
    let Some(index) = teams.iter().position(|t| t.name == name) else {
        log::debug!("No registered team named '{}', stats update skipped", name);
        return Ok(None);
    };

    let team = &teams[index];
    let stats = team.stats.after_match(team.name == winner).ok_or_else(|| {
        ClubError::validation(format!("Team '{}' cannot record another match", team.name))
    })?;
    Ok(Some((index, stats)))
}
