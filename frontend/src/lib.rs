use leptos::*;

pub mod api;
pub use api::HttpApi;

pub mod logging;

mod navbar;
pub use navbar::TopBar;

mod notices;
pub use notices::NoticeBar;

mod options;

pub mod homepage;
pub use homepage::Homepage;

pub mod add_stats_form;
pub use add_stats_form::AddStatsForm;

pub mod stats_table;
pub use stats_table::StatsTable;

pub mod report;
pub use report::Report;

/// Provided once at the root and shared by every page.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub api: HttpApi,
    pub config: client::Config,
    pub notices: RwSignal<client::notice::Notices>,
}

impl AppContext {
    pub fn new(config: client::Config) -> Self {
        Self {
            api: HttpApi::new(config.api_base.as_str()),
            config,
            notices: RwSignal::new(client::notice::Notices::default()),
        }
    }
}

/// Configuration baked in at build time, e.g. `STATS_API_BASE=http://localhost:5000 trunk build`.
pub fn config_from_env() -> client::Config {
    client::Config::from_values(
        option_env!("STATS_API_BASE"),
        option_env!("STATS_DEFAULT_TEAM"),
        option_env!("STATS_FAILURE_POLICY"),
    )
}
