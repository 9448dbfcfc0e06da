use leptos::*;
use leptos_router::*;

use frontend::{AppContext, Homepage, NoticeBar, Report, StatsTable, TopBar};

fn main() {
    frontend::logging::init();

    let config = frontend::config_from_env();
    tracing::info!(?config, "Starting...");

    mount_to_body(move || {
        provide_context(AppContext::new(config));

        view! {
            <Router>
                <nav>
                    <TopBar />
                </nav>
                <main>
                    <NoticeBar />

                    <Routes>
                        <Route path="/" view=Homepage />
                        <Route path="/stats-table" view=StatsTable />
                        <Route path="/report" view=Report />
                    </Routes>
                </main>
            </Router>
        }
    })
}
