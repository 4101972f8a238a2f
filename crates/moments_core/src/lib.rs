//! Core domain logic for Moments.
//! This crate is the single source of truth for moment storage rules and
//! screen coordination.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod repo;
pub mod screen;
pub mod strings;

pub use app::MomentsApp;
pub use config::{ConfigError, LoggingConfig, MomentsConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category_tag::{CategoryTag, NO_CATEGORY_ID};
pub use model::moment::{Moment, MomentId};
pub use navigation::action::{NavOptions, NavigationAction, Transition};
pub use navigation::alert::{Alert, AlertButton};
pub use navigation::navigator::{Navigator, WatchNavigator};
pub use navigation::routes::CreateEditParams;
pub use repo::moment_dao::{MomentDao, RepoError, RepoResult, SqliteMomentDao};
pub use repo::moment_repository::{
    DaoMomentRepository, LoadOutcome, MomentRepository, MutationOutcome,
};
pub use screen::create_edit::{
    CommitOutcome, ConfirmAction, ConfirmPhase, CreateEditHolder, CreateEditState, InvalidInput,
};
pub use screen::home::{HomeHolder, HomeState};
pub use strings::Strings;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
