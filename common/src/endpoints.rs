//! Paths of the REST API, relative to the configured base.

use crate::TeamId;

pub const GET_PLAYERS: &str = "/player/get_players";
pub const GET_GAMES: &str = "/game/get_games";
pub const GET_TEAMS: &str = "/team/get_teams";

pub const GET_STATS: &str = "/stats/get_stats";
pub const ADD_STATS: &str = "/stats/add_stats";
pub const EDIT_STATS: &str = "/stats/edit_stats";
pub const DELETE_STATS: &str = "/stats/delete_stats";

pub const GET_RECORD: &str = "/report/get_record";
pub const GET_ROSTER: &str = "/report/get_roster";
pub const GET_STATS_LEADERS: &str = "/report/get_stats_leaders";
pub const GET_PAST_GAMES: &str = "/report/get_past_games";

/// Joins `path` onto `base` without doubling or dropping the separator.
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// A report path with its `team_id` query attached.
pub fn team_scoped(base: &str, path: &str, team: TeamId) -> String {
    format!("{}?team_id={}", join(base, path), team)
}
