//! Loads an option list once, keeping the previous list if the request fails.

use common::options::OptionList;
use common::{GameId, PlayerId, TeamId};
use leptos::*;

use crate::HttpApi;

pub fn load_players(api: HttpApi, target: RwSignal<OptionList<PlayerId>>) {
    spawn_local(async move {
        if let Some(list) = client::options::players(&api).await {
            target.set(list);
        }
    });
}

pub fn load_games(api: HttpApi, target: RwSignal<OptionList<GameId>>) {
    spawn_local(async move {
        if let Some(list) = client::options::games(&api).await {
            target.set(list);
        }
    });
}

pub fn load_teams(api: HttpApi, target: RwSignal<OptionList<TeamId>>) {
    spawn_local(async move {
        if let Some(list) = client::options::teams(&api).await {
            target.set(list);
        }
    });
}
