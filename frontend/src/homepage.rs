use leptos::*;

use crate::AddStatsForm;

#[leptos::component]
pub fn homepage() -> impl leptos::IntoView {
    use leptos_router::A;

    let style = stylers::style! {
        "Homepage",
        .links {
            display: flex;
            column-gap: 2ch;
            margin-top: 2vh;
        }
    };

    view! {class = style,
        <div>
            <AddStatsForm />

            <div class="links">
                <A href="/stats-table">Edit recorded stats</A>
                <A href="/report">Team report</A>
            </div>
        </div>
    }
}
