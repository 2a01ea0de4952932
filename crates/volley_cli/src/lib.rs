//! Club CLI helpers
//!
//! Script runner (one JSON request per line) and summary rendering, kept out
//! of `main.rs` so they can be tested.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::Path;

use volley_core::api::ClubResponse;
use volley_core::{execute_club_json, ClubConfig, SharedClub};

/// Totals for one script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptStats {
    pub processed: usize,
    pub failed: usize,
}

/// Resolve the club config: explicit file, then `VOLLEY_CONFIG_PATH`, then defaults.
pub fn load_config(path: Option<&Path>, empty: bool) -> Result<ClubConfig> {
    let mut config = match path {
        Some(path) => {
            let path = path.to_str().context("Config path is not valid UTF-8")?;
            ClubConfig::from_path(path).map_err(anyhow::Error::msg)?
        }
        None => ClubConfig::from_env().map_err(anyhow::Error::msg)?,
    };

    if empty {
        config.seed_demo_data = false;
    }
    Ok(config)
}

/// Execute each request line and write one response line per request.
///
/// Blank lines and `#` comments are skipped. A line that cannot be decoded or executed
/// produces a rejected response and the run continues.
pub fn run_script<R: BufRead, W: Write>(
    club: &SharedClub,
    input: R,
    out: &mut W,
) -> Result<ScriptStats> {
    let mut stats = ScriptStats::default();

    for (index, raw) in input.split(b'\n').enumerate() {
        let number = index + 1;
        let raw = raw.with_context(|| format!("Failed to read script line {}", number))?;

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(_) => {
                stats.processed += 1;
                stats.failed += 1;
                let response = ClubResponse::rejected(format!("line {}: invalid UTF-8", number))
                    .to_json()
                    .map_err(anyhow::Error::msg)?;
                writeln!(out, "{}", response).context("Failed to write response")?;
                continue;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        stats.processed += 1;
        let response = match execute_club_json(club, line) {
            Ok(json) => {
                if !succeeded(&json) {
                    stats.failed += 1;
                }
                json
            }
            Err(message) => {
                stats.failed += 1;
                ClubResponse::rejected(format!("line {}: {}", number, message))
                    .to_json()
                    .map_err(anyhow::Error::msg)?
            }
        };

        writeln!(out, "{}", response).context("Failed to write response")?;
    }

    Ok(stats)
}

fn succeeded(response_json: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(response_json)
        .map(|v| v["success"] == true)
        .unwrap_or(false)
}

/// Human-readable team summary and leaderboard
pub fn render_summary(club: &SharedClub, team_id: u64) -> Result<String> {
    let (summary, leaderboard) = club.read(|store| {
        Ok::<_, volley_core::ClubError>((
            store.team_summary(team_id)?,
            store.player_leaderboard(team_id)?,
        ))
    })?;

    let mut text = String::new();
    text.push_str(&format!("🏐 {} ({})\n", summary.team.name, summary.team.category));
    text.push_str(&format!(
        "   Record:   {}W - {}L ({} played, {}% win rate)\n",
        summary.wins, summary.losses, summary.matches_played, summary.win_rate
    ));

    match &summary.next_match {
        Some(next) => text.push_str(&format!(
            "   Next:     {} vs {} on {} {} @ {}\n",
            next.team_a, next.team_b, next.date, next.time, next.location
        )),
        None => text.push_str("   Next:     no upcoming match\n"),
    }
    text.push_str(&format!("   Upcoming: {}\n", summary.upcoming.len()));

    text.push_str("\n📊 Leaderboard\n");
    for (rank, player) in leaderboard.iter().enumerate() {
        text.push_str(&format!(
            "   {:>2}. #{:<3} {:<20} {:<16} {:>4} pts  {:>3} aces  {:>3} blocks  {:>3}%\n",
            rank + 1,
            player.number,
            player.name,
            player.position,
            player.stats.total_points,
            player.stats.aces,
            player.stats.blocks,
            player.stats.efficiency
        ));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn run(club: &SharedClub, script: &str) -> (ScriptStats, Vec<serde_json::Value>) {
        let mut out = Vec::new();
        let stats = run_script(club, Cursor::new(script), &mut out).unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (stats, lines)
    }

    #[test]
    fn test_script_runs_each_request() {
        let club = SharedClub::with_config(ClubConfig::empty());
        let script = r#"
# create and play one match
{"schema_version":1,"request_type":{"type":"CreateTeam","name":"Garuda Volley","category":"Professional"}}
{"schema_version":1,"request_type":{"type":"CreateMatch","teamA":"Garuda Volley","teamB":"Nusantara Smashers"}}

{"schema_version":1,"request_type":{"type":"GetMatches"}}
"#;
        let (stats, lines) = run(&club, script);

        assert_eq!(stats, ScriptStats { processed: 3, failed: 0 });
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2]["response_type"]["matches"][0]["status"], "upcoming");
    }

    #[test]
    fn test_bad_lines_do_not_stop_the_run() {
        let club = SharedClub::with_config(ClubConfig::empty());
        let script = concat!(
            "not json at all\n",
            r#"{"schema_version":1,"request_type":{"type":"RecordResult","matchId":77,"teamAScore":3,"teamBScore":0}}"#,
            "\n",
            r#"{"schema_version":1,"request_type":{"type":"GetTeams"}}"#,
            "\n",
        );
        let (stats, lines) = run(&club, script);

        assert_eq!(stats, ScriptStats { processed: 3, failed: 2 });
        assert!(lines[0]["error_message"].as_str().unwrap().starts_with("line 1:"));
        assert_eq!(lines[1]["error_kind"], "not_found");
        assert_eq!(lines[2]["success"], true);
    }

    #[test]
    fn test_invalid_utf8_line_is_rejected_and_run_continues() {
        let club = SharedClub::with_config(ClubConfig::empty());
        let mut script = b"\xff\xfe garbage\n".to_vec();
        script.extend_from_slice(br#"{"schema_version":1,"request_type":{"type":"GetTeams"}}"#);
        script.extend_from_slice(b"\r\n");

        let mut out = Vec::new();
        let stats = run_script(&club, Cursor::new(script), &mut out).unwrap();
        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(stats, ScriptStats { processed: 2, failed: 1 });
        assert_eq!(lines[0]["success"], false);
        assert_eq!(lines[0]["error_message"], "line 1: invalid UTF-8");
        assert_eq!(lines[1]["success"], true);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"seed_demo_data": true, "first_id": 500}}"#).unwrap();

        let config = load_config(Some(file.path()), false).unwrap();
        assert_eq!(config.first_id, 500);
        assert!(config.seed_demo_data);

        let config = load_config(Some(file.path()), true).unwrap();
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_load_config_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"first_id": 0}}"#).unwrap();
        let err = load_config(Some(file.path()), false).unwrap_err();
        assert!(err.to_string().contains("Invalid club config"));
    }

    #[test]
    fn test_render_summary_for_demo_team() {
        let club = SharedClub::with_config(ClubConfig::default());
        let team_id = club.read(|store| store.find_team_by_name("Garuda Volley").unwrap().id);

        let text = render_summary(&club, team_id).unwrap();
        assert!(text.contains("Garuda Volley (Professional)"));
        assert!(text.contains("18W - 6L"));
        assert!(text.contains("75% win rate"));
        assert!(text.contains("Nusantara Smashers"));

        let budi = text.find("Budi Santoso").unwrap();
        let citra = text.find("Citra Lestari").unwrap();
        assert!(budi < citra);
    }

    #[test]
    fn test_render_summary_unknown_team() {
        let club = SharedClub::with_config(ClubConfig::empty());
        assert!(render_summary(&club, 42).is_err());
    }
}
