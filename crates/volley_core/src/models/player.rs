use super::PlayerId;
use serde::{Deserialize, Serialize};

/// Season totals for one player. Set when the player is created, never
/// recomputed from match results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub total_points: u32,
    pub aces: u32,
    pub blocks: u32,
    pub errors: u32,
    /// Percentage, 0-100
    pub efficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Jersey number
    pub number: u32,
    pub position: String,
    pub stats: PlayerStats,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: String, number: u32, position: String) -> Self {
        Self { id, name, number, position, stats: PlayerStats::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_zeroed_stats() {
        let player = Player::new(3, "Citra Lestari".to_string(), 10, "Libero".to_string());
        assert_eq!(player.stats, PlayerStats::default());
        assert_eq!(player.stats.efficiency, 0);
    }

    #[test]
    fn test_stats_wire_names() {
        let stats = PlayerStats { total_points: 145, aces: 28, blocks: 15, errors: 12, efficiency: 92 };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["totalPoints"], 145);
        assert_eq!(json["efficiency"], 92);
    }
}
