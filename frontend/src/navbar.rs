use leptos::*;
use leptos_router::A;

#[leptos::component]
pub fn top_bar() -> impl leptos::IntoView {
    let style = stylers::style! {
        "TopBar",
        .bar {
            width: 100%;
            height: 4vh;
            padding-top: 0.5vh;
            padding-bottom: 0.5vh;

            background-color: #28282f;
            color: #d5d5d5;

            display: grid;
            grid-template-columns: 15vw auto auto auto 1fr;
            column-gap: 2vw;
        }

        .elem {
            display: inline-block;
            margin-top: auto;
            margin-bottom: auto;
            color: #d5d5d5;
        }

        .logo {
            color: #d5d5d5;
            width: 15vw;
            font-size: 24px;
            padding: 0px;
            margin: 0px;
            margin-left: 1vw;
        }
    };

    view! {class = style,
        <div class="bar">
            <A href="/">
                <p class="logo">Stat Sheet</p>
            </A>

            <div class="elem">
                <A href="/">Home</A>
            </div>
            <div class="elem">
                <A href="/stats-table">Stats Table</A>
            </div>
            <div class="elem">
                <A href="/report">Report</A>
            </div>
        </div>
    }
}
