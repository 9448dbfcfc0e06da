use leptos::*;

use client::grid::{GridError, Mutation, RowAction, RowKey, RowMode, StatsGrid};
use client::{ErrorKind, StatsApi};
use common::options::OptionList;
use common::{Counter, GameId, PlayerId};

use crate::AppContext;

#[leptos::component]
pub fn stats_table() -> impl leptos::IntoView {
    let ctx = expect_context::<AppContext>();
    let notices = ctx.notices;

    let grid = RwSignal::new(StatsGrid::new(ctx.config.failure_policy));
    let players = RwSignal::new(OptionList::<PlayerId>::default());
    let games = RwSignal::new(OptionList::<GameId>::default());

    crate::options::load_players(ctx.api.clone(), players);
    crate::options::load_games(ctx.api.clone(), games);

    let api = ctx.api.clone();
    let reload = create_action(move |_: &()| {
        let api = api.clone();
        async move {
            match api.stat_lines().await {
                Ok(lines) => grid.update(|g| g.replace_all(lines)),
                Err(e) => tracing::error!("Loading stat lines: {}", e),
            }
        }
    });
    reload.dispatch(());

    let api = ctx.api.clone();
    let commit = create_action(move |mutation: &Mutation| {
        let api = api.clone();
        let mutation = mutation.clone();
        async move {
            let action = match &mutation {
                Mutation::Create { .. } => "Adding stat line",
                Mutation::Update { .. } => "Saving stat line",
                Mutation::Delete { .. } => "Deleting stat line",
            };

            let result = mutation.send(&api).await;

            if let Some(Err(e)) = grid.try_update(|g| g.settle(mutation, result)) {
                notices.update(|n| {
                    n.report(action, &e);
                });
            }
        }
    });

    let on_row_action = Callback::new(move |(key, action): (RowKey, RowAction)| {
        match grid.try_update(|g| g.dispatch(key, action)) {
            Some(Ok(Some(mutation))) => commit.dispatch(mutation),
            Some(Ok(None)) | None => {}
            Some(Err(e)) if action == RowAction::Save => {
                tracing::error!("Rejected row update: {}", e);
                if let GridError::DuplicateKey(_) | GridError::IncompleteKey(_) = e {
                    notices.update(|n| {
                        n.push(ErrorKind::Validation, format!("Saving stat line: {}", e));
                    });
                }
                reload.dispatch(());
            }
            Some(Err(e)) => tracing::warn!("Ignoring {:?} on row {}: {}", action, key, e),
        }
    });

    let style = stylers::style! {
        "StatsTable",
        table {
            width: 100%;
            border-collapse: collapse;
        }

        tr:nth-child(even) {
            background-color: #dddddd;
        }

        th {
            padding-left: 10px;
            padding-right: 10px;
            text-align: left;
        }

        .toolbar {
            margin-bottom: 1vh;
        }
    };

    view! {class = style,
        <div>
            <h2>Stats Table</h2>

            <div class="toolbar">
                <button on:click=move |_| {
                    grid.update(|g| {
                        g.add_row();
                    });
                }>Add record</button>
            </div>

            <table>
                <tr>
                    <th>Player</th>
                    <th>Game</th>
                    { Counter::ALL.into_iter().map(|c| view! { <th>{ c.abbreviation() }</th> }).collect::<Vec<_>>() }
                    <th>Actions</th>
                </tr>
                <For
                    each=move || grid.with(StatsGrid::row_keys)
                    key=|row| *row
                    children=move |row| {
                        view! {
                            <GridRow row=row grid=grid players=players games=games on_action=on_row_action />
                        }
                    }
                />
            </table>

            <Show when=move || grid.with(StatsGrid::is_empty)>
                <p>No stat lines recorded yet.</p>
            </Show>
        </div>
    }
}

fn label<Id>(list: &OptionList<Id>, id: Option<Id>) -> String
where
    Id: PartialEq + Copy + core::fmt::Display,
{
    match id {
        Some(id) => list
            .label_for(id)
            .map(str::to_owned)
            .unwrap_or_else(|| id.to_string()),
        None => String::new(),
    }
}

#[leptos::component]
fn grid_row(
    row: RowKey,
    grid: RwSignal<StatsGrid>,
    players: RwSignal<OptionList<PlayerId>>,
    games: RwSignal<OptionList<GameId>>,
    on_action: Callback<(RowKey, RowAction)>,
) -> impl IntoView {
    let editing = move || grid.with(|g| g.row(row).map(|r| r.mode()) == Some(RowMode::Edit));
    let transient = move || grid.with(|g| g.row(row).map(|r| r.is_transient()).unwrap_or(false));
    let creating = move || grid.with(|g| g.row(row).map(|r| r.is_creating()).unwrap_or(false));

    let player_id = move || grid.with(|g| g.row(row).and_then(|r| r.player_id()));
    let game_id = move || grid.with(|g| g.row(row).and_then(|r| r.game_id()));
    let player_label = move || players.with(|list| label(list, player_id()));
    let game_label = move || games.with(|list| label(list, game_id()));

    let player_cell = move || {
        if editing() && transient() {
            view! {
                <select
                    on:change=move |ev| {
                        let Ok(player) = event_target_value(&ev).parse::<PlayerId>() else {
                            return;
                        };
                        if let Some(Err(e)) = grid.try_update(|g| g.select_player(row, player)) {
                            tracing::warn!("Selecting player: {}", e);
                        }
                    }
                    prop:value=move || player_id().map(|p| p.to_string()).unwrap_or_default()
                >
                    <option value="" disabled>Player</option>
                    { move || players.with(|list| list.iter().map(|option| view! {
                        <option value=option.value.to_string()>{ option.label.clone() }</option>
                    }).collect::<Vec<_>>()) }
                </select>
            }
            .into_view()
        } else {
            player_label.into_view()
        }
    };

    let game_cell = move || {
        if editing() && transient() {
            view! {
                <select
                    on:change=move |ev| {
                        let Ok(game) = event_target_value(&ev).parse::<GameId>() else {
                            return;
                        };
                        if let Some(Err(e)) = grid.try_update(|g| g.select_game(row, game)) {
                            tracing::warn!("Selecting game: {}", e);
                        }
                    }
                    prop:value=move || game_id().map(|g| g.to_string()).unwrap_or_default()
                >
                    <option value="" disabled>Game</option>
                    { move || games.with(|list| list.iter().map(|option| view! {
                        <option value=option.value.to_string()>{ option.label.clone() }</option>
                    }).collect::<Vec<_>>()) }
                </select>
            }
            .into_view()
        } else {
            game_label.into_view()
        }
    };

    let counter_cells = Counter::ALL
        .into_iter()
        .map(|counter| {
            let value = move || grid.with(|g| g.row(row).map(|r| r.counter(counter)).unwrap_or_default());

            view! {
                <td>
                    <Show when=editing fallback=move || value.into_view()>
                        <input
                            type="number"
                            prop:value=move || value().to_string()
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                match raw.trim().parse::<i32>() {
                                    Ok(parsed) => {
                                        if let Some(Err(e)) = grid.try_update(|g| g.set_counter(row, counter, parsed)) {
                                            tracing::warn!("Editing {}: {}", counter.abbreviation(), e);
                                        }
                                    }
                                    Err(_) => tracing::debug!("Ignoring non-numeric {} input {:?}", counter.abbreviation(), raw),
                                }
                            }
                        />
                    </Show>
                </td>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <tr>
            <td>{ player_cell }</td>
            <td>{ game_cell }</td>
            { counter_cells }
            <td>
                <Show
                    when=editing
                    fallback=move || view! {
                        <button disabled=creating on:click=move |_| on_action.call((row, RowAction::Edit))>Edit</button>
                        <button disabled=creating on:click=move |_| on_action.call((row, RowAction::Delete))>Delete</button>
                    }
                >
                    <button on:click=move |_| on_action.call((row, RowAction::Save))>Save</button>
                    <button on:click=move |_| on_action.call((row, RowAction::Cancel))>Cancel</button>
                </Show>
            </td>
        </tr>
    }
}
