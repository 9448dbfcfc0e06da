use leptos::*;

#[leptos::component]
pub fn roster() -> impl IntoView {
    let report = expect_context::<super::CurrentReport>().0;
    let stale = move || report.with(|r| r.is_stale(r.roster()));

    let style = stylers::style! {
        "Report-Roster",
        tr:nth-child(even) {
            background-color: #dddddd;
        }

        th {
            padding-left: 10px;
            padding-right: 10px;
        }
        th:nth-child(1) {
            width: 200px;
        }
    };

    let rows = move || {
        report.with(|r| {
            r.roster()
                .data()
                .iter()
                .map(|row| {
                    view! {class = style,
                        <tr>
                            <td>{ row.player_name.clone() }</td>
                            <td>{ format!("{:.1}", row.ppg) }</td>
                            <td>{ format!("{:.1}", row.apg) }</td>
                            <td>{ format!("{:.1}", row.rpg) }</td>
                            <td>{ format!("{:.1}", row.bpg) }</td>
                            <td>{ format!("{:.1}", row.spg) }</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {class = style,
        <div style:opacity=move || if stale() { "0.5" } else { "1" }>
            <h3>Roster</h3>
            <table>
                <tr>
                    <th>Player</th>
                    <th>PPG</th>
                    <th>APG</th>
                    <th>RPG</th>
                    <th>BPG</th>
                    <th>SPG</th>
                </tr>
                { rows }
            </table>
        </div>
    }
}
