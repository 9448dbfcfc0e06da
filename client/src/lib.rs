//! Application logic of the stats frontend that does not depend on the DOM.
//!
//! Every piece of state in here is owned by the component that mounts it and
//! talks to the REST API only through [`StatsApi`].

pub mod api;
pub use api::StatsApi;

pub mod config;
pub use config::{Config, FailurePolicy};

pub mod error;
pub use error::{ApiError, ErrorKind};

pub mod form;
pub mod grid;
pub mod notice;
pub mod options;
pub mod report;
