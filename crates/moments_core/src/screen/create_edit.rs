//! Create/edit moment screen holder.
//!
//! # Responsibility
//! - Own the form snapshot (title, category, button gates).
//! - Drive the confirmation flow for create, edit and delete:
//!   `Idle -> AwaitingConfirmation -> Idle | Committing -> Idle`.
//! - Commit through the repository and report back via the navigator.
//!
//! # Invariants
//! - The snapshot is replaced wholesale on every change.
//! - At most one commit is in flight per holder; further confirms are
//!   rejected until it finishes.
//! - A commit ends with either a pop to the home route or a corrective
//!   alert. There is no automatic retry.
//! - Edit and delete address the moment by the title the screen opened with.

use crate::model::category_tag::CategoryTag;
use crate::model::moment::Moment;
use crate::navigation::alert::{Alert, AlertButton};
use crate::navigation::navigator::Navigator;
use crate::navigation::routes::{CreateEditParams, HOME_SCREEN};
use crate::repo::moment_repository::{MomentRepository, MutationOutcome};
use crate::strings::Strings;
use log::{error, info, warn};
use std::sync::{Arc, Weak};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Create,
    Edit,
    Delete,
}

impl ConfirmAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Delete => "delete",
        }
    }
}

/// Where the screen is in the confirmation flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmPhase {
    #[default]
    Idle,
    AwaitingConfirmation(ConfirmAction),
    Committing(ConfirmAction),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEditState {
    pub create_enabled: bool,
    pub edit_enabled: bool,
    pub title: String,
    pub category_tag: Option<CategoryTag>,
    pub phase: ConfirmPhase,
}

/// Input problem that blocks a create or edit commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    NoTitle,
    NoCategory,
}

#[derive(Debug)]
pub enum CommitOutcome {
    /// The repository ran; the screen popped back to the list.
    Committed(MutationOutcome),
    /// Nothing was written; a corrective alert is showing.
    Invalid(InvalidInput),
    /// The storage task died before reporting back.
    Aborted,
}

/// Create is allowed once a non-blank title and a category are present.
pub fn create_enabled(title: &str, category_tag: Option<CategoryTag>) -> bool {
    !title.trim().is_empty() && category_tag.is_some()
}

/// Edit is allowed once the title or category differs from the opened values.
pub fn edit_enabled(
    title: &str,
    category_tag: Option<CategoryTag>,
    params: &CreateEditParams,
) -> bool {
    let title_changed = !title.is_empty() && title != params.title_or_empty();
    let category_changed = category_tag.is_some() && category_tag != params.category_tag();
    title_changed || category_changed
}

pub struct CreateEditHolder {
    inner: Arc<Inner>,
}

struct Inner {
    params: CreateEditParams,
    repository: Arc<dyn MomentRepository>,
    navigator: Arc<dyn Navigator>,
    strings: Arc<Strings>,
    runtime: Handle,
    state_tx: watch::Sender<CreateEditState>,
}

enum StorageRequest {
    Insert(Moment),
    Edit { current_title: String, moment: Moment },
    Delete { title: String },
}

impl CreateEditHolder {
    /// Opens the screen. Edit mode params prefill the form.
    pub fn new(
        params: CreateEditParams,
        repository: Arc<dyn MomentRepository>,
        navigator: Arc<dyn Navigator>,
        strings: Arc<Strings>,
        runtime: Handle,
    ) -> Self {
        let initial = if params.is_edit() {
            let title = params.title_or_empty().to_string();
            let category_tag = params.category_tag();
            CreateEditState {
                create_enabled: create_enabled(&title, category_tag),
                edit_enabled: edit_enabled(&title, category_tag, &params),
                title,
                category_tag,
                phase: ConfirmPhase::Idle,
            }
        } else {
            CreateEditState::default()
        };

        Self {
            inner: Arc::new(Inner {
                params,
                repository,
                navigator,
                strings,
                runtime,
                state_tx: watch::Sender::new(initial),
            }),
        }
    }

    pub fn params(&self) -> &CreateEditParams {
        &self.inner.params
    }

    pub fn is_editing(&self) -> bool {
        self.inner.params.is_edit()
    }

    pub fn state(&self) -> watch::Receiver<CreateEditState> {
        self.inner.state_tx.subscribe()
    }

    pub fn snapshot(&self) -> CreateEditState {
        self.inner.state_tx.borrow().clone()
    }

    pub fn on_title_changed(&self, title: impl Into<String>) {
        let title = title.into();
        self.inner
            .replace_state(|state| self.inner.form_state(title, state.category_tag, state.phase));
    }

    pub fn on_category_selected(&self, category_tag: CategoryTag) {
        self.inner.replace_state(|state| {
            self.inner
                .form_state(state.title.clone(), Some(category_tag), state.phase)
        });
    }

    pub fn on_toolbar_back(&self) {
        self.inner.navigator.pop(Some(HOME_SCREEN.to_string()));
    }

    pub fn on_create_clicked(&self) {
        Inner::request_confirmation(&self.inner, ConfirmAction::Create);
    }

    pub fn on_edit_clicked(&self) {
        Inner::request_confirmation(&self.inner, ConfirmAction::Edit);
    }

    pub fn on_delete_clicked(&self) {
        Inner::request_confirmation(&self.inner, ConfirmAction::Delete);
    }

    /// Runs the commit for `action`, normally reached through the
    /// confirmation alert's confirm button.
    ///
    /// Returns `None` when another commit from this screen is still running.
    pub fn confirm(&self, action: ConfirmAction) -> Option<JoinHandle<CommitOutcome>> {
        Inner::confirm(&self.inner, action)
    }

    /// Leaves `AwaitingConfirmation` without committing.
    pub fn cancel_confirmation(&self) {
        self.inner.cancel_confirmation();
    }

    /// Resets the form to an empty create-mode snapshot.
    pub fn clear_state(&self) {
        self.inner.clear_state();
    }
}

impl Inner {
    fn replace_state(&self, next: impl FnOnce(&CreateEditState) -> CreateEditState) {
        self.state_tx.send_modify(|state| *state = next(state));
    }

    fn form_state(
        &self,
        title: String,
        category_tag: Option<CategoryTag>,
        phase: ConfirmPhase,
    ) -> CreateEditState {
        CreateEditState {
            create_enabled: create_enabled(&title, category_tag),
            edit_enabled: edit_enabled(&title, category_tag, &self.params),
            title,
            category_tag,
            phase,
        }
    }

    fn request_confirmation(this: &Arc<Self>, action: ConfirmAction) {
        let accepted = this.state_tx.send_if_modified(|state| {
            if matches!(state.phase, ConfirmPhase::Committing(_)) {
                return false;
            }
            *state = CreateEditState {
                phase: ConfirmPhase::AwaitingConfirmation(action),
                ..state.clone()
            };
            true
        });
        if !accepted {
            warn!(
                "event=moment_confirm module=screen status=busy action={}",
                action.as_str()
            );
            return;
        }

        this.navigator
            .alert(Some(Self::confirmation_alert(this, action)));
    }

    fn confirm(this: &Arc<Self>, action: ConfirmAction) -> Option<JoinHandle<CommitOutcome>> {
        let started = this.state_tx.send_if_modified(|state| {
            if matches!(state.phase, ConfirmPhase::Committing(_)) {
                return false;
            }
            *state = CreateEditState {
                phase: ConfirmPhase::Committing(action),
                ..state.clone()
            };
            true
        });
        if !started {
            warn!(
                "event=moment_commit module=screen status=duplicate action={}",
                action.as_str()
            );
            return None;
        }

        let inner = Arc::clone(this);
        Some(this.runtime.spawn(async move { inner.commit(action).await }))
    }

    async fn commit(self: Arc<Self>, action: ConfirmAction) -> CommitOutcome {
        self.navigator.enable_progress();

        let request = match self.storage_request(action) {
            Ok(request) => request,
            Err(invalid) => {
                info!(
                    "event=moment_commit module=screen status=invalid action={} reason={invalid:?}",
                    action.as_str()
                );
                self.navigator.disable_progress();
                self.replace_state(idle);
                self.navigator.alert(Some(self.invalid_input_alert(invalid)));
                return CommitOutcome::Invalid(invalid);
            }
        };

        let repository = Arc::clone(&self.repository);
        let joined = tokio::task::spawn_blocking(move || match request {
            StorageRequest::Insert(moment) => repository.insert_moment(&moment),
            StorageRequest::Edit {
                current_title,
                moment,
            } => repository.edit_moment(&current_title, &moment),
            StorageRequest::Delete { title } => repository.delete_moment(&title),
        })
        .await;

        match joined {
            Ok(outcome) => {
                info!(
                    "event=moment_commit module=screen status=ok action={} applied={}",
                    action.as_str(),
                    outcome.is_applied()
                );
                self.clear_state();
                self.navigator.disable_progress();
                self.navigator.pop(Some(HOME_SCREEN.to_string()));
                CommitOutcome::Committed(outcome)
            }
            Err(err) => {
                error!(
                    "event=moment_commit module=screen status=error action={} error={err}",
                    action.as_str()
                );
                self.navigator.disable_progress();
                self.replace_state(idle);
                CommitOutcome::Aborted
            }
        }
    }

    /// Resolves the final title and category, falling back to the values the
    /// screen was opened with when the form leaves them unset.
    fn storage_request(&self, action: ConfirmAction) -> Result<StorageRequest, InvalidInput> {
        let opened_title = self.params.title_or_empty();
        if action == ConfirmAction::Delete {
            return Ok(StorageRequest::Delete {
                title: opened_title.to_string(),
            });
        }

        let state = self.state_tx.borrow().clone();
        let title = if state.title.is_empty() {
            opened_title.to_string()
        } else {
            state.title
        };
        if title.trim().is_empty() {
            return Err(InvalidInput::NoTitle);
        }
        let category_tag = state
            .category_tag
            .or_else(|| self.params.category_tag())
            .ok_or(InvalidInput::NoCategory)?;

        let moment = Moment::new(title, category_tag);
        Ok(match action {
            ConfirmAction::Edit => StorageRequest::Edit {
                current_title: opened_title.to_string(),
                moment,
            },
            _ => StorageRequest::Insert(moment),
        })
    }

    fn cancel_confirmation(&self) {
        self.state_tx.send_if_modified(|state| {
            if !matches!(state.phase, ConfirmPhase::AwaitingConfirmation(_)) {
                return false;
            }
            *state = idle(state);
            true
        });
    }

    fn clear_state(&self) {
        self.state_tx.send_replace(CreateEditState::default());
    }

    fn confirmation_alert(this: &Arc<Self>, action: ConfirmAction) -> Alert {
        let strings = &this.strings;
        let (title, description) = match action {
            ConfirmAction::Create => (
                &strings.creating_moment,
                &strings.are_you_sure_you_want_to_create_this_moment,
            ),
            ConfirmAction::Edit => (
                &strings.editing_moment,
                &strings.are_you_sure_you_want_to_edit_this_moment,
            ),
            ConfirmAction::Delete => (
                &strings.deleting_moment,
                &strings.are_you_sure_you_want_to_delete_this_moment,
            ),
        };

        // Weak handles: the alert sits in the navigator, which the holder owns.
        let on_confirm = Arc::downgrade(this);
        let on_cancel = Arc::downgrade(this);
        let on_dismiss = Arc::downgrade(this);

        Alert::new(title.as_str())
            .description(description.as_str())
            .confirm_button(AlertButton::with_action(strings.yes.as_str(), move || {
                if let Some(inner) = on_confirm.upgrade() {
                    let _ = Self::confirm(&inner, action);
                }
            }))
            .dismiss_button(AlertButton::with_action(strings.no.as_str(), move || {
                cancel_through(&on_cancel);
            }))
            .on_dismiss(move || cancel_through(&on_dismiss))
    }

    fn invalid_input_alert(&self, invalid: InvalidInput) -> Alert {
        let strings = &self.strings;
        let (title, description, button) = match invalid {
            InvalidInput::NoTitle => (
                &strings.no_title_entered_alert_title,
                &strings.no_title_entered_alert_description,
                &strings.no_title_entered_alert_confirm_button,
            ),
            InvalidInput::NoCategory => (
                &strings.no_category_selected_alert_title,
                &strings.no_category_selected_alert_description,
                &strings.no_category_selected_alert_confirm_button,
            ),
        };

        Alert::new(title.as_str())
            .description(description.as_str())
            .confirm_button(AlertButton::new(button.as_str()))
    }
}

fn idle(state: &CreateEditState) -> CreateEditState {
    CreateEditState {
        phase: ConfirmPhase::Idle,
        ..state.clone()
    }
}

fn cancel_through(inner: &Weak<Inner>) {
    if let Some(inner) = inner.upgrade() {
        inner.cancel_confirmation();
    }
}
