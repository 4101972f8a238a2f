//! Home (moment list) screen holder.
//!
//! # Responsibility
//! - Publish the list of stored moments as an immutable snapshot.
//! - Turn list taps and the create button into navigation requests.
//!
//! # Invariants
//! - State is replaced wholesale on every refresh.
//! - Storage reads run on the blocking pool, never on the caller's thread.

use crate::model::category_tag::NO_CATEGORY_ID;
use crate::model::moment::Moment;
use crate::navigation::navigator::Navigator;
use crate::navigation::routes::create_edit_moment;
use crate::repo::moment_repository::{LoadOutcome, MomentRepository};
use log::error;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub moments: Vec<Moment>,
    /// Last refresh hit a storage fault. `moments` is empty in that case.
    pub load_failed: bool,
}

pub struct HomeHolder {
    repository: Arc<dyn MomentRepository>,
    navigator: Arc<dyn Navigator>,
    runtime: Handle,
    state_tx: Arc<watch::Sender<HomeState>>,
}

impl HomeHolder {
    pub fn new(
        repository: Arc<dyn MomentRepository>,
        navigator: Arc<dyn Navigator>,
        runtime: Handle,
    ) -> Self {
        Self {
            repository,
            navigator,
            runtime,
            state_tx: Arc::new(watch::Sender::new(HomeState::default())),
        }
    }

    pub fn state(&self) -> watch::Receiver<HomeState> {
        self.state_tx.subscribe()
    }

    pub fn snapshot(&self) -> HomeState {
        self.state_tx.borrow().clone()
    }

    /// Reloads all moments. Call whenever the list becomes visible again.
    pub fn refresh(&self) -> JoinHandle<()> {
        let repository = Arc::clone(&self.repository);
        let state_tx = Arc::clone(&self.state_tx);
        self.runtime.spawn(async move {
            let outcome =
                match tokio::task::spawn_blocking(move || repository.load_all_moments()).await {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        error!("event=home_refresh module=screen status=error error={err}");
                        return;
                    }
                };

            let next = match outcome {
                LoadOutcome::Loaded(moments) => HomeState {
                    moments,
                    load_failed: false,
                },
                LoadOutcome::Empty => HomeState::default(),
                LoadOutcome::Failed(_) => HomeState {
                    moments: Vec::new(),
                    load_failed: true,
                },
            };
            state_tx.send_replace(next);
        })
    }

    /// Opens the selected moment for editing.
    pub fn on_item_clicked(&self, title: &str, category_id: i32) {
        self.navigator
            .navigate(Some(create_edit_moment(Some(title), category_id)));
    }

    /// Opens the create screen with no prefilled values.
    pub fn on_create_clicked(&self) {
        self.navigator.navigate(Some(create_edit_moment(None, NO_CATEGORY_ID)));
    }
}
