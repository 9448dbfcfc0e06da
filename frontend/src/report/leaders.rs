use leptos::*;

#[leptos::component]
pub fn leaders() -> impl IntoView {
    let report = expect_context::<super::CurrentReport>().0;
    let stale = move || report.with(|r| r.is_stale(r.leaders()));

    let rows = move || {
        report.with(|r| {
            r.leaders()
                .data()
                .iter()
                .map(|row| {
                    view! {
                        <tr>
                            <td>{ row.stat_category.clone() }</td>
                            <td>{ row.player_name.clone() }</td>
                        </tr>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div style:opacity=move || if stale() { "0.5" } else { "1" }>
            <h3>Stats Leaders</h3>
            <table>
                <tr>
                    <th>Stat</th>
                    <th>Player</th>
                </tr>
                { rows }
            </table>
        </div>
    }
}
