use leptos::*;

use client::report::TeamReport;
use common::options::OptionList;
use common::TeamId;

use crate::AppContext;

pub mod leaders;
pub mod past_games;
pub mod record;
pub mod roster;
pub mod team_dropdown;

use leaders::Leaders;
use past_games::PastGames;
use record::Record;
use roster::Roster;
use team_dropdown::TeamDropdown;

/// Report state shared by the four sub-views.
#[derive(Debug, Clone, Copy)]
struct CurrentReport(RwSignal<TeamReport>);

#[leptos::component]
pub fn report() -> impl leptos::IntoView {
    let ctx = expect_context::<AppContext>();
    let default_team = ctx.config.default_team;

    let report = RwSignal::new(TeamReport::new(default_team));
    let selected = RwSignal::new(default_team);
    let teams = RwSignal::new(OptionList::<TeamId>::default());
    provide_context(CurrentReport(report));

    crate::options::load_teams(ctx.api.clone(), teams);

    let api = ctx.api.clone();
    create_effect(move |_| {
        let team = selected.get();
        let queries = report.try_update(|r| r.select(team)).into_iter().flatten();

        for query in queries {
            let api = api.clone();
            spawn_local(async move {
                let response = query.fetch(&api).await;
                report.update(|r| {
                    r.apply(response);
                });
            });
        }
    });

    let style = stylers::style! {
        "Report",
        .views {
            display: grid;
            grid-template-columns: 1fr 1fr;
            column-gap: 2vw;
            row-gap: 2vh;
        }
    };

    view! {class = style,
        <div>
            <h2>Team Report</h2>

            <TeamDropdown teams=teams selected=selected />

            <div class="views">
                <Record />
                <Leaders />
                <Roster />
                <PastGames />
            </div>
        </div>
    }
}
