// Demo club loaded into a fresh store
use super::ClubState;
use crate::models::{
    Drill, DrillLevel, Match, MatchResult, MatchStatus, Player, PlayerStats, Team, TeamStats,
    TrainingSession,
};

fn player(id: u64, name: &str, number: u32, position: &str, stats: [u32; 5]) -> Player {
    let [total_points, aces, blocks, errors, efficiency] = stats;
    Player {
        id,
        name: name.to_string(),
        number,
        position: position.to_string(),
        stats: PlayerStats { total_points, aces, blocks, errors, efficiency: efficiency as u8 },
    }
}

fn fixture(id: u64, team_a: &str, team_b: &str, date: &str, time: &str, location: &str) -> Match {
    Match::scheduled(
        id,
        team_a.to_string(),
        team_b.to_string(),
        date.to_string(),
        time.to_string(),
        location.to_string(),
    )
}

fn completed(mut m: Match, team_a_score: u32, team_b_score: u32) -> Match {
    let winner = if team_a_score > team_b_score { m.team_a.clone() } else { m.team_b.clone() };
    m.status = MatchStatus::Completed {
        result: MatchResult { team_a_score, team_b_score, winner },
    };
    m
}

pub fn demo_state() -> ClubState {
    let mut garuda = Team::new(1, "Garuda Volley".to_string(), "Professional".to_string());
    garuda.stats = TeamStats { wins: 18, losses: 6 };
    garuda.roster = vec![
        player(2, "Ahmad Rizki", 1, "Setter", [145, 28, 15, 12, 92]),
        player(3, "Budi Santoso", 5, "Outside Hitter", [256, 35, 20, 25, 88]),
        player(4, "Citra Lestari", 10, "Libero", [25, 2, 5, 3, 98]),
        player(5, "Dewi Anggraini", 7, "Middle Blocker", [198, 15, 55, 18, 90]),
    ];

    let matches = vec![
        fixture(6, "Garuda Volley", "Nusantara Smashers", "2025-10-05", "15:00", "GOR Bhinneka"),
        fixture(7, "Jakarta Thunder", "Garuda Volley", "2025-10-08", "18:00", "Istora Senayan"),
        completed(
            fixture(8, "Surabaya Fire", "Garuda Volley", "2025-09-28", "19:00", "DBL Arena"),
            2,
            3,
        ),
        completed(
            fixture(9, "Garuda Volley", "Bandung Strikers", "2025-09-21", "16:00", "GOR Bhinneka"),
            3,
            1,
        ),
    ];

    let drills = vec![
        Drill {
            id: 10,
            title: "Spike Technique Training".to_string(),
            category: "Attacking".to_string(),
            level: DrillLevel::Intermediate,
            description: "Latihan teknik spike untuk meningkatkan power dan akurasi.".to_string(),
            duration: 30,
            players: "6-8 pemain".to_string(),
            steps: vec![
                "Warm-up with light jogging and dynamic stretches.".to_string(),
                "Practice approach footwork without the ball.".to_string(),
                "Tosses for hitting, focusing on timing.".to_string(),
                "Full approach and spike against a block.".to_string(),
                "Cool-down with static stretches.".to_string(),
            ],
        },
        Drill {
            id: 11,
            title: "Blocking Drill".to_string(),
            category: "Defense".to_string(),
            level: DrillLevel::Advanced,
            description: "Latihan blocking timing dan positioning untuk menghentikan serangan lawan."
                .to_string(),
            duration: 45,
            players: "4-6 pemain".to_string(),
            steps: Vec::new(),
        },
        Drill {
            id: 12,
            title: "Serve and Receive".to_string(),
            category: "Fundamentals".to_string(),
            level: DrillLevel::Beginner,
            description: "Fokus pada konsistensi servis dan penerimaan bola pertama yang akurat."
                .to_string(),
            duration: 25,
            players: "Seluruh tim".to_string(),
            steps: Vec::new(),
        },
    ];

    let training_sessions = vec![TrainingSession {
        id: 13,
        title: "Team Practice".to_string(),
        date: "2025-10-03".to_string(),
        time: "17:00".to_string(),
        location: "Home Court".to_string(),
    }];

    ClubState { teams: vec![garuda], matches, drills, training_sessions }
}
