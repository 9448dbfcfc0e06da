use leptos::*;

#[leptos::component]
pub fn record() -> impl IntoView {
    let report = expect_context::<super::CurrentReport>().0;
    let stale = move || report.with(|r| r.is_stale(r.record()));

    let record = move || report.with(|r| r.record().data().to_string());

    view! {
        <div style:opacity=move || if stale() { "0.5" } else { "1" }>
            <h3>Win-Loss Record:</h3>
            <p>{ record }</p>
        </div>
    }
}
