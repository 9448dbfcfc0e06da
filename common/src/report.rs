//! Read-only, team scoped aggregates computed by the API.

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

impl core::fmt::Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Per-game averages of one player on the roster.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RosterRow {
    pub player_name: String,
    pub ppg: f64,
    pub apg: f64,
    pub rpg: f64,
    pub bpg: f64,
    pub spg: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LeaderRow {
    pub stat_category: String,
    pub player_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PastGame {
    pub date: String,
    pub opponent: String,
    pub score: String,
    pub wl: String,
}
