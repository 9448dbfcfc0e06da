#![allow(dead_code)]

use client::{ApiError, StatsApi};
use common::report::{LeaderRow, PastGame, Record, RosterRow};
use common::{Game, GameId, Player, PlayerId, StatLine, StatLineKey, Team, TeamId};
use std::cell::RefCell;

/// Every request the application issued, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Players,
    Games,
    Teams,
    StatLines,
    AddStatLine(StatLine),
    EditStatLine(StatLine),
    DeleteStatLine(StatLineKey),
    Record(TeamId),
    Roster(TeamId),
    StatsLeaders(TeamId),
    PastGames(TeamId),
}

/// In-memory stand-in for the REST API that records every call.
#[derive(Debug, Default)]
pub struct RecordingApi {
    requests: RefCell<Vec<Request>>,
    pub stat_lines: Vec<StatLine>,
    /// When set, every request fails with this error.
    pub failure: RefCell<Option<ApiError>>,
}

impl RecordingApi {
    pub fn with_stat_lines(stat_lines: Vec<StatLine>) -> Self {
        Self {
            stat_lines,
            ..Self::default()
        }
    }

    pub fn fail_with(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn clear(&self) {
        self.requests.borrow_mut().clear();
    }

    fn respond<T>(&self, request: Request, value: T) -> Result<T, ApiError> {
        self.requests.borrow_mut().push(request);
        match self.failure.borrow().clone() {
            Some(e) => Err(e),
            None => Ok(value),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl StatsApi for RecordingApi {
    async fn players(&self) -> Result<Vec<Player>, ApiError> {
        self.respond(
            Request::Players,
            vec![
                player(1, "Jalen", "Brunson"),
                player(3, "Mikal", "Bridges"),
                player(6, "Josh", "Hart"),
            ],
        )
    }

    async fn games(&self) -> Result<Vec<Game>, ApiError> {
        self.respond(
            Request::Games,
            vec![Game {
                game_id: GameId(1),
                date: "2023-11-02".to_owned(),
                time: "19:30:00".to_owned(),
                location: "Main Gym".to_owned(),
            }],
        )
    }

    async fn teams(&self) -> Result<Vec<Team>, ApiError> {
        self.respond(
            Request::Teams,
            vec![
                Team {
                    team_id: TeamId(1),
                    name: "Knicks".to_owned(),
                },
                Team {
                    team_id: TeamId(2),
                    name: "Hornets".to_owned(),
                },
            ],
        )
    }

    async fn stat_lines(&self) -> Result<Vec<StatLine>, ApiError> {
        self.respond(Request::StatLines, self.stat_lines.clone())
    }

    async fn add_stat_line(&self, line: &StatLine) -> Result<(), ApiError> {
        self.respond(Request::AddStatLine(line.clone()), ())
    }

    async fn edit_stat_line(&self, line: &StatLine) -> Result<(), ApiError> {
        self.respond(Request::EditStatLine(line.clone()), ())
    }

    async fn delete_stat_line(&self, key: StatLineKey) -> Result<(), ApiError> {
        self.respond(Request::DeleteStatLine(key), ())
    }

    async fn record(&self, team: TeamId) -> Result<Record, ApiError> {
        self.respond(
            Request::Record(team),
            Record {
                wins: team.0 as u32 * 2,
                losses: 1,
            },
        )
    }

    async fn roster(&self, team: TeamId) -> Result<Vec<RosterRow>, ApiError> {
        self.respond(
            Request::Roster(team),
            vec![RosterRow {
                player_name: format!("Player of team {}", team),
                ppg: 21.5,
                apg: 4.0,
                rpg: 7.25,
                bpg: 0.5,
                spg: 1.0,
            }],
        )
    }

    async fn stats_leaders(&self, team: TeamId) -> Result<Vec<LeaderRow>, ApiError> {
        self.respond(
            Request::StatsLeaders(team),
            vec![LeaderRow {
                stat_category: "PPG".to_owned(),
                player_name: format!("Leader of team {}", team),
            }],
        )
    }

    async fn past_games(&self, team: TeamId) -> Result<Vec<PastGame>, ApiError> {
        self.respond(
            Request::PastGames(team),
            vec![PastGame {
                date: "2023-11-02".to_owned(),
                opponent: "Hornets".to_owned(),
                score: "101-99".to_owned(),
                wl: "W".to_owned(),
            }],
        )
    }
}

pub fn player(id: i64, first_name: &str, last_name: &str) -> Player {
    Player {
        player_id: PlayerId(id),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    }
}

pub fn stat_line(player: i64, game: i64, points: i32) -> StatLine {
    StatLine {
        player_id: PlayerId(player),
        game_id: GameId(game),
        points,
        assists: 3,
        rebounds: 5,
        blocks: 1,
        steals: 2,
    }
}

/// The two rows used throughout the grid tests.
pub fn two_lines() -> Vec<StatLine> {
    vec![stat_line(1, 1, 16), stat_line(6, 1, 31)]
}
