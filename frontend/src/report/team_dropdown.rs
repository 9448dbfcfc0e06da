use leptos::*;

use common::options::OptionList;
use common::TeamId;

#[leptos::component]
pub fn team_dropdown(teams: RwSignal<OptionList<TeamId>>, selected: RwSignal<TeamId>) -> impl IntoView {
    let options = move || {
        teams.with(|list| {
            list.iter()
                .map(|option| {
                    view! {
                        <option value=option.value.to_string()>{ option.label.clone() }</option>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <label>
            "Team: "
            <select
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<TeamId>() {
                        Ok(team) => selected.set(team),
                        Err(e) => tracing::warn!("Invalid team selection: {}", e),
                    }
                }
                prop:value=move || selected.get().to_string()
            >
                { options }
            </select>
        </label>
    }
}
