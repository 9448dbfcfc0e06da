use leptos::*;

use client::form::AddStatLineForm;
use common::options::OptionList;
use common::{Counter, GameId, PlayerId};

use crate::AppContext;

#[leptos::component]
pub fn add_stats_form() -> impl leptos::IntoView {
    let ctx = expect_context::<AppContext>();
    let notices = ctx.notices;

    let form = RwSignal::new(AddStatLineForm::default());
    let players = RwSignal::new(OptionList::<PlayerId>::default());
    let games = RwSignal::new(OptionList::<GameId>::default());

    crate::options::load_players(ctx.api.clone(), players);
    crate::options::load_games(ctx.api.clone(), games);

    let api = ctx.api.clone();
    let submit = create_action(move |_: &()| {
        let api = api.clone();
        async move {
            let pending = match form.try_update(|f| f.begin_submit()) {
                Some(Ok(pending)) => pending,
                Some(Err(e)) => {
                    tracing::warn!("Not submitting stat line: {}", e);
                    return;
                }
                None => return,
            };

            let result = pending.send(&api).await;

            if let Some(Err(e)) = form.try_update(|f| f.complete_submit(pending, result)) {
                notices.update(|n| {
                    n.report("Adding stat line", &e);
                });
            }
        }
    });

    let style = stylers::style! {
        "AddStatsForm",
        .field {
            display: block;
            width: 100%;
            margin-bottom: 2vh;
        }

        .counters {
            display: grid;
            grid-template-columns: repeat(5, 1fr);
            column-gap: 2vw;
            margin-bottom: 2vh;
        }
    };

    let player_options = move || {
        players.with(|list| {
            list.iter()
                .map(|option| {
                    view! {
                        <option value=option.value.to_string()>{ option.label.clone() }</option>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let game_options = move || {
        games.with(|list| {
            list.iter()
                .map(|option| {
                    view! {
                        <option value=option.value.to_string()>{ option.label.clone() }</option>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let counter_inputs = Counter::ALL
        .into_iter()
        .map(|counter| {
            view! {
                <input
                    type="number"
                    required
                    placeholder=counter.abbreviation()
                    prop:value=move || form.with(|f| f.counter(counter).to_owned())
                    on:input=move |ev| form.update(|f| f.set_counter(counter, event_target_value(&ev)))
                />
            }
        })
        .collect::<Vec<_>>();

    view! {class = style,
        <div>
            <h2>Add Player Game Stats Form</h2>

            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.dispatch(());
            }>
                <select
                    class="field"
                    required
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.select_player(value.parse().ok()));
                    }
                    prop:value=move || form.with(|f| f.player().map(|p| p.to_string()).unwrap_or_default())
                >
                    <option value="" disabled>Player</option>
                    { player_options }
                </select>

                <select
                    class="field"
                    required
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.select_game(value.parse().ok()));
                    }
                    prop:value=move || form.with(|f| f.game().map(|g| g.to_string()).unwrap_or_default())
                >
                    <option value="" disabled>Game</option>
                    { game_options }
                </select>

                <div class="counters">
                    { counter_inputs }
                </div>

                <button type="submit" disabled=move || form.with(AddStatLineForm::is_submitting)>
                    Add Record
                </button>
            </form>
        </div>
    }
}
