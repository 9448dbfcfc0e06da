pub mod endpoints;
pub mod options;
pub mod report;

macro_rules! id_type {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl core::str::FromStr for $name {
            type Err = core::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

id_type!(PlayerId);
id_type!(GameId);
id_type!(TeamId);

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Game {
    pub game_id: GameId,
    pub date: String,
    pub time: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub name: String,
}

/// The natural key of a [`StatLine`] on the server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct StatLineKey {
    pub player_id: PlayerId,
    pub game_id: GameId,
}

/// One player's counters for one game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatLine {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub points: i32,
    pub assists: i32,
    pub rebounds: i32,
    pub blocks: i32,
    pub steals: i32,
}

impl StatLine {
    pub fn key(&self) -> StatLineKey {
        StatLineKey {
            player_id: self.player_id,
            game_id: self.game_id,
        }
    }

    pub fn counter(&self, counter: Counter) -> i32 {
        match counter {
            Counter::Points => self.points,
            Counter::Assists => self.assists,
            Counter::Rebounds => self.rebounds,
            Counter::Blocks => self.blocks,
            Counter::Steals => self.steals,
        }
    }

    pub fn counter_mut(&mut self, counter: Counter) -> &mut i32 {
        match counter {
            Counter::Points => &mut self.points,
            Counter::Assists => &mut self.assists,
            Counter::Rebounds => &mut self.rebounds,
            Counter::Blocks => &mut self.blocks,
            Counter::Steals => &mut self.steals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Points,
    Assists,
    Rebounds,
    Blocks,
    Steals,
}

impl Counter {
    pub const ALL: [Counter; 5] = [
        Counter::Points,
        Counter::Assists,
        Counter::Rebounds,
        Counter::Blocks,
        Counter::Steals,
    ];

    /// Column header as shown in the grid and the form.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Counter::Points => "PTS",
            Counter::Assists => "AST",
            Counter::Rebounds => "REB",
            Counter::Blocks => "BLK",
            Counter::Steals => "STL",
        }
    }
}
