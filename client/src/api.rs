use common::report::{LeaderRow, PastGame, Record, RosterRow};
use common::{Game, Player, StatLine, StatLineKey, Team, TeamId};

use crate::ApiError;

/// The REST API that owns every player, game, team and stat line.
///
/// Implemented over HTTP by the frontend and by recording mocks in tests.
/// The futures are not `Send`, everything runs on the browser's event loop.
#[async_trait::async_trait(?Send)]
pub trait StatsApi {
    async fn players(&self) -> Result<Vec<Player>, ApiError>;

    async fn games(&self) -> Result<Vec<Game>, ApiError>;

    async fn teams(&self) -> Result<Vec<Team>, ApiError>;

    async fn stat_lines(&self) -> Result<Vec<StatLine>, ApiError>;

    async fn add_stat_line(&self, line: &StatLine) -> Result<(), ApiError>;

    /// Overwrites the counters of the stat line with the same `(player_id, game_id)`.
    async fn edit_stat_line(&self, line: &StatLine) -> Result<(), ApiError>;

    async fn delete_stat_line(&self, key: StatLineKey) -> Result<(), ApiError>;

    async fn record(&self, team: TeamId) -> Result<Record, ApiError>;

    async fn roster(&self, team: TeamId) -> Result<Vec<RosterRow>, ApiError>;

    async fn stats_leaders(&self, team: TeamId) -> Result<Vec<LeaderRow>, ApiError>;

    async fn past_games(&self, team: TeamId) -> Result<Vec<PastGame>, ApiError>;
}
