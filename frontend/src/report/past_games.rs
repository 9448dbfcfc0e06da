use leptos::*;

#[leptos::component]
pub fn past_games() -> impl IntoView {
    let report = expect_context::<super::CurrentReport>().0;
    let stale = move || report.with(|r| r.is_stale(r.past_games()));

    let style = stylers::style! {
        "Report-PastGames",
        tr:nth-child(even) {
            background-color: #dddddd;
        }

        .win {
            color: #2f8a3a;
        }
    };

    let rows = move || {
        report.with(|r| {
            r.past_games()
                .data()
                .iter()
                .map(|game| {
                    let win = game.wl == "W";

                    view! {class = style,
                        <tr>
                            <td>{ game.date.clone() }</td>
                            <td>{ game.opponent.clone() }</td>
                            <td>{ game.score.clone() }</td>
                            <td class:win=win>{ game.wl.clone() }</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {class = style,
        <div style:opacity=move || if stale() { "0.5" } else { "1" }>
            <h3>Past Games</h3>
            <table>
                <tr>
                    <th>Date</th>
                    <th>Opponent</th>
                    <th>Score</th>
                    <th>W/L</th>
                </tr>
                { rows }
            </table>
        </div>
    }
}
