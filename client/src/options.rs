//! Loaders for the option lists behind the player, game and team selects.
//!
//! A failed load is logged and yields `None`, the caller keeps whatever list
//! it already had.

use common::options::{game_options, player_options, team_options, OptionList};
use common::{GameId, PlayerId, TeamId};

use crate::StatsApi;

pub async fn players<A>(api: &A) -> Option<OptionList<PlayerId>>
where
    A: StatsApi + ?Sized,
{
    match api.players().await {
        Ok(players) => Some(player_options(&players)),
        Err(e) => {
            tracing::error!("Loading players: {}", e);
            None
        }
    }
}

pub async fn games<A>(api: &A) -> Option<OptionList<GameId>>
where
    A: StatsApi + ?Sized,
{
    match api.games().await {
        Ok(games) => Some(game_options(&games)),
        Err(e) => {
            tracing::error!("Loading games: {}", e);
            None
        }
    }
}

pub async fn teams<A>(api: &A) -> Option<OptionList<TeamId>>
where
    A: StatsApi + ?Sized,
{
    match api.teams().await {
        Ok(teams) => Some(team_options(&teams)),
        Err(e) => {
            tracing::error!("Loading teams: {}", e);
            None
        }
    }
}
