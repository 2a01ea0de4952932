//! JSON API for club operations
//!
//! One request in, one response out. Every call is a full round trip against
//! a `SharedClub`: reads return snapshots, writes return the created or
//! updated record.
//!
//! The envelope (`schema_version`, `request_type`, `error_message`) is
//! snake_case; fields inside a request or response variant are camelCase, the
//! same as the records they carry.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ClubError, ErrorKind};
use crate::models::{
    Drill, Match, MatchId, NewDrill, NewTrainingSession, Player, Team, TeamId, TrainingSession,
};
use crate::query::TeamSummary;
use crate::state::SharedClub;

pub const API_SCHEMA_VERSION: u8 = 1;

/// Club request
#[derive(Debug, Deserialize)]
pub struct ClubRequest {
    pub schema_version: u8,
    pub request_type: ClubRequestType,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ClubRequestType {
    GetTeams,
    GetMatches,
    GetDrills,
    GetTrainingSessions,

    CreateTeam {
        name: String,
        #[serde(default)]
        category: String,
    },

    AddPlayer {
        team_id: TeamId,
        name: String,
        number: u32,
        #[serde(default)]
        position: String,
    },

    CreateMatch {
        team_a: String,
        team_b: String,
        #[serde(default)]
        date: String,
        #[serde(default)]
        time: String,
        #[serde(default)]
        location: String,
    },

    RecordResult {
        match_id: MatchId,
        team_a_score: u32,
        team_b_score: u32,
    },

    /// Append an already-structured drill (e.g. from the drill generator)
    AddDrill { drill: NewDrill },

    AddTrainingSession { session: NewTrainingSession },

    GetTeamSummary { team_id: TeamId },

    GetLeaderboard { team_id: TeamId },
}

impl ClubRequestType {
    pub fn name(&self) -> &'static str {
        match self {
            ClubRequestType::GetTeams => "GetTeams",
            ClubRequestType::GetMatches => "GetMatches",
            ClubRequestType::GetDrills => "GetDrills",
            ClubRequestType::GetTrainingSessions => "GetTrainingSessions",
            ClubRequestType::CreateTeam { .. } => "CreateTeam",
            ClubRequestType::AddPlayer { .. } => "AddPlayer",
            ClubRequestType::CreateMatch { .. } => "CreateMatch",
            ClubRequestType::RecordResult { .. } => "RecordResult",
            ClubRequestType::AddDrill { .. } => "AddDrill",
            ClubRequestType::AddTrainingSession { .. } => "AddTrainingSession",
            ClubRequestType::GetTeamSummary { .. } => "GetTeamSummary",
            ClubRequestType::GetLeaderboard { .. } => "GetLeaderboard",
        }
    }
}

/// Club response
#[derive(Debug, Serialize)]
pub struct ClubResponse {
    pub schema_version: u8,
    pub success: bool,
    pub response_type: Option<ClubResponseType>,
    pub error_kind: Option<ErrorKind>,
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum ClubResponseType {
    Teams { teams: Vec<Team> },
    Matches { matches: Vec<Match> },
    Drills { drills: Vec<Drill> },
    TrainingSessions { sessions: Vec<TrainingSession> },
    Team { team: Team },
    Player { player: Player },
    Match {
        #[serde(rename = "match")]
        fixture: Match,
    },
    Drill { drill: Drill },
    TrainingSession { session: TrainingSession },
    TeamSummary { summary: TeamSummary },
    Leaderboard { team_id: TeamId, players: Vec<Player> },
}

impl ClubResponse {
    fn ok(response_type: ClubResponseType) -> Self {
        Self {
            schema_version: API_SCHEMA_VERSION,
            success: true,
            response_type: Some(response_type),
            error_kind: None,
            error_message: None,
        }
    }

    fn failed(err: &ClubError) -> Self {
        Self {
            schema_version: API_SCHEMA_VERSION,
            success: false,
            response_type: None,
            error_kind: Some(err.kind()),
            error_message: Some(err.to_string()),
        }
    }

    /// Response for input that never reached the store
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            schema_version: API_SCHEMA_VERSION,
            success: false,
            response_type: None,
            error_kind: None,
            error_message: Some(message.into()),
        }
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to serialize response: {}", e))
    }
}

/// Execute one JSON request against the club.
///
/// Malformed JSON and unsupported schema versions are `Err`. Domain failures
/// (unknown ids, rejected input) come back as `Ok` with `success: false`.
pub fn execute_club_json(club: &SharedClub, request_json: &str) -> Result<String, String> {
    let request: ClubRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    if request.schema_version != API_SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let request_name = request.request_type.name();
    debug!(request = request_name, "club request");

    let response = match dispatch(club, request.request_type) {
        Ok(response_type) => ClubResponse::ok(response_type),
        Err(err) => {
            warn!(request = request_name, error = %err, "club request rejected");
            ClubResponse::failed(&err)
        }
    };

    response.to_json()
}

fn dispatch(
    club: &SharedClub,
    request_type: ClubRequestType,
) -> Result<ClubResponseType, ClubError> {
    let response_type = match request_type {
        ClubRequestType::GetTeams => {
            ClubResponseType::Teams { teams: club.read(|store| store.list_teams()) }
        }

        ClubRequestType::GetMatches => {
            ClubResponseType::Matches { matches: club.read(|store| store.list_matches()) }
        }

        ClubRequestType::GetDrills => {
            ClubResponseType::Drills { drills: club.read(|store| store.list_drills()) }
        }

        ClubRequestType::GetTrainingSessions => ClubResponseType::TrainingSessions {
            sessions: club.read(|store| store.list_training_sessions()),
        },

        ClubRequestType::CreateTeam { name, category } => {
            let team = club.write(|store| store.create_team(&name, &category))?;
            ClubResponseType::Team { team }
        }

        ClubRequestType::AddPlayer { team_id, name, number, position } => {
            let player = club.write(|store| store.add_player(team_id, &name, number, &position))?;
            ClubResponseType::Player { player }
        }

        ClubRequestType::CreateMatch { team_a, team_b, date, time, location } => {
            let fixture = club.write(|store| {
                store.create_match(&team_a, &team_b, &date, &time, &location)
            })?;
            ClubResponseType::Match { fixture }
        }

        ClubRequestType::RecordResult { match_id, team_a_score, team_b_score } => {
            let fixture =
                club.write(|store| store.record_result(match_id, team_a_score, team_b_score))?;
            ClubResponseType::Match { fixture }
        }

        ClubRequestType::AddDrill { drill } => {
            let drill = club.write(|store| store.add_drill(drill))?;
            ClubResponseType::Drill { drill }
        }

        ClubRequestType::AddTrainingSession { session } => {
            let session = club.write(|store| store.add_training_session(session))?;
            ClubResponseType::TrainingSession { session }
        }

        ClubRequestType::GetTeamSummary { team_id } => {
            let summary = club.read(|store| store.team_summary(team_id))?;
            ClubResponseType::TeamSummary { summary }
        }

        ClubRequestType::GetLeaderboard { team_id } => {
            let players = club.read(|store| store.player_leaderboard(team_id))?;
            ClubResponseType::Leaderboard { team_id, players }
        }
    };

    Ok(response_type)
}
