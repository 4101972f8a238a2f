//! Composition root.
//!
//! # Responsibility
//! - Own the single process-scoped navigator, the repository and the alert
//!   copy, and hand them to screen holders by reference.
//!
//! # Invariants
//! - Every holder created by one `MomentsApp` shares the same navigator and
//!   repository instances.

use crate::config::MomentsConfig;
use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::navigation::navigator::{Navigator, WatchNavigator};
use crate::navigation::routes::CreateEditParams;
use crate::repo::moment_dao::SqliteMomentDao;
use crate::repo::moment_repository::{DaoMomentRepository, MomentRepository};
use crate::screen::create_edit::CreateEditHolder;
use crate::screen::home::HomeHolder;
use crate::strings::Strings;
use rusqlite::Connection;
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct MomentsApp {
    navigator: Arc<WatchNavigator>,
    repository: Arc<dyn MomentRepository>,
    strings: Arc<Strings>,
    runtime: Handle,
}

impl MomentsApp {
    /// Opens the configured database file.
    pub fn open(config: &MomentsConfig, runtime: Handle) -> DbResult<Self> {
        let conn = open_db(&config.db_path)?;
        Ok(Self::from_connection(conn, config.strings.clone(), runtime))
    }

    /// Builds an app over a fresh in-memory database with default copy.
    pub fn in_memory(runtime: Handle) -> DbResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self::from_connection(conn, Strings::default(), runtime))
    }

    fn from_connection(conn: Connection, strings: Strings, runtime: Handle) -> Self {
        let repository = DaoMomentRepository::new(SqliteMomentDao::new(conn));
        Self::with_repository(Arc::new(repository), strings, runtime)
    }

    /// Builds an app over any repository implementation.
    pub fn with_repository(
        repository: Arc<dyn MomentRepository>,
        strings: Strings,
        runtime: Handle,
    ) -> Self {
        Self {
            navigator: Arc::new(WatchNavigator::new()),
            repository,
            strings: Arc::new(strings),
            runtime,
        }
    }

    pub fn navigator(&self) -> Arc<dyn Navigator> {
        Arc::clone(&self.navigator) as Arc<dyn Navigator>
    }

    /// Concrete navigator, for presenters that read slots without subscribing.
    pub fn watch_navigator(&self) -> &WatchNavigator {
        &self.navigator
    }

    pub fn repository(&self) -> Arc<dyn MomentRepository> {
        Arc::clone(&self.repository)
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn home(&self) -> HomeHolder {
        HomeHolder::new(self.repository(), self.navigator(), self.runtime.clone())
    }

    pub fn create_edit(&self, params: CreateEditParams) -> CreateEditHolder {
        CreateEditHolder::new(
            params,
            self.repository(),
            self.navigator(),
            Arc::clone(&self.strings),
            self.runtime.clone(),
        )
    }

    /// Opens the create/edit screen for an encoded destination, as produced
    /// by `routes::create_edit_moment`. `None` for any other route.
    pub fn create_edit_for_route(&self, route: &str) -> Option<CreateEditHolder> {
        CreateEditParams::from_route(route).map(|params| self.create_edit(params))
    }
}
