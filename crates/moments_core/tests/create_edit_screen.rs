use moments_core::navigation::routes::HOME_SCREEN;
use moments_core::{
    CategoryTag, CommitOutcome, ConfirmAction, ConfirmPhase, CreateEditParams, CreateEditState,
    InvalidInput, LoadOutcome, Moment, MomentRepository, MomentsApp, MutationOutcome, Navigator,
    Strings,
};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::time::timeout;

fn app() -> MomentsApp {
    MomentsApp::in_memory(Handle::current()).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn create_flow_through_confirmation_alert() {
    let app = app();
    let holder = app.create_edit(CreateEditParams::default());

    holder.on_title_changed("Trip");
    assert!(!holder.snapshot().create_enabled);
    holder.on_category_selected(CategoryTag::Family);
    assert!(holder.snapshot().create_enabled);

    holder.on_create_clicked();
    assert_eq!(
        holder.snapshot().phase,
        ConfirmPhase::AwaitingConfirmation(ConfirmAction::Create)
    );
    let alert = app.watch_navigator().current_alert().unwrap();
    assert_eq!(alert.title, app.strings().creating_moment);
    assert_eq!(
        alert.confirm_button.as_ref().map(|b| b.text.as_str()),
        Some("Yes")
    );

    let mut pop = app.navigator().pop_route_actions();
    alert.confirm();
    timeout(Duration::from_secs(5), pop.changed())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(pop.borrow().as_deref(), Some(HOME_SCREEN));
    assert!(!app.watch_navigator().is_progress_visible());
    assert_eq!(holder.snapshot(), CreateEditState::default());

    let stored = app.repository().get_all_moments();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Trip");
    assert_eq!(stored[0].category_tag, CategoryTag::Family);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_title_shows_no_title_alert() {
    let app = app();
    let holder = app.create_edit(CreateEditParams::default());
    holder.on_category_selected(CategoryTag::Love);

    let outcome = holder.confirm(ConfirmAction::Create).unwrap().await.unwrap();
    assert!(matches!(outcome, CommitOutcome::Invalid(InvalidInput::NoTitle)));

    let alert = app.watch_navigator().current_alert().unwrap();
    assert_eq!(alert.title, app.strings().no_title_entered_alert_title);
    assert_eq!(holder.snapshot().phase, ConfirmPhase::Idle);
    assert!(!app.watch_navigator().is_progress_visible());
    assert_eq!(app.watch_navigator().current_pop_route(), None);
    assert!(app.repository().get_all_moments().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn blank_title_counts_as_missing() {
    let app = app();
    let holder = app.create_edit(CreateEditParams::default());
    holder.on_title_changed("   ");
    holder.on_category_selected(CategoryTag::Love);

    let outcome = holder.confirm(ConfirmAction::Create).unwrap().await.unwrap();
    assert!(matches!(outcome, CommitOutcome::Invalid(InvalidInput::NoTitle)));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_category_shows_no_category_alert() {
    let app = app();
    let holder = app.create_edit(CreateEditParams::default());
    holder.on_title_changed("Trip");

    let outcome = holder.confirm(ConfirmAction::Create).unwrap().await.unwrap();
    assert!(matches!(
        outcome,
        CommitOutcome::Invalid(InvalidInput::NoCategory)
    ));

    let alert = app.watch_navigator().current_alert().unwrap();
    assert_eq!(alert.title, app.strings().no_category_selected_alert_title);
    assert!(app.repository().get_all_moments().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_mode_prefills_and_updates_in_place() {
    let app = app();
    let original = Moment::new("Trip", CategoryTag::Family);
    app.repository().insert_moment(&original);

    let holder = app.create_edit(CreateEditParams::edit("Trip", CategoryTag::Family));
    let state = holder.snapshot();
    assert_eq!(state.title, "Trip");
    assert_eq!(state.category_tag, Some(CategoryTag::Family));
    assert!(!state.edit_enabled);

    holder.on_title_changed("Trip2");
    holder.on_category_selected(CategoryTag::Love);
    assert!(holder.snapshot().edit_enabled);

    let outcome = holder.confirm(ConfirmAction::Edit).unwrap().await.unwrap();
    assert!(matches!(
        outcome,
        CommitOutcome::Committed(MutationOutcome::Applied)
    ));

    assert_eq!(
        app.repository().get_all_moments(),
        vec![Moment::with_id(original.id, "Trip2", CategoryTag::Love)]
    );
    assert_eq!(
        app.watch_navigator().current_pop_route().as_deref(),
        Some(HOME_SCREEN)
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn edit_with_cleared_title_keeps_opened_title() {
    let app = app();
    let original = Moment::new("Trip", CategoryTag::Family);
    app.repository().insert_moment(&original);

    let holder = app.create_edit(CreateEditParams::edit("Trip", CategoryTag::Family));
    holder.on_title_changed("");
    holder.on_category_selected(CategoryTag::Tech);

    holder.confirm(ConfirmAction::Edit).unwrap().await.unwrap();
    assert_eq!(
        app.repository().get_all_moments(),
        vec![Moment::with_id(original.id, "Trip", CategoryTag::Tech)]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_uses_opened_title() {
    let app = app();
    app.repository()
        .insert_moment(&Moment::new("Trip", CategoryTag::Family));
    let other = Moment::new("Other", CategoryTag::Music);
    app.repository().insert_moment(&other);

    let holder = app.create_edit(CreateEditParams::edit("Trip", CategoryTag::Family));
    holder.on_title_changed("Other");
    let outcome = holder.confirm(ConfirmAction::Delete).unwrap().await.unwrap();

    assert!(matches!(
        outcome,
        CommitOutcome::Committed(MutationOutcome::Applied)
    ));
    assert_eq!(app.repository().get_all_moments(), vec![other]);
}

#[tokio::test(flavor = "multi_thread")]
async fn dismissing_confirmation_returns_to_idle_without_writing() {
    let app = app();
    app.repository()
        .insert_moment(&Moment::new("Trip", CategoryTag::Family));
    let holder = app.create_edit(CreateEditParams::edit("Trip", CategoryTag::Family));

    holder.on_delete_clicked();
    let alert = app.watch_navigator().current_alert().unwrap();
    assert_eq!(alert.title, app.strings().deleting_moment);
    alert.dismiss();
    assert_eq!(holder.snapshot().phase, ConfirmPhase::Idle);

    holder.on_edit_clicked();
    app.watch_navigator().current_alert().unwrap().dismissed();
    assert_eq!(holder.snapshot().phase, ConfirmPhase::Idle);

    assert_eq!(app.repository().get_all_moments().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn toolbar_back_pops_to_home() {
    let app = app();
    let holder = app.create_edit(CreateEditParams::default());
    holder.on_toolbar_back();
    assert_eq!(
        app.watch_navigator().current_pop_route().as_deref(),
        Some(HOME_SCREEN)
    );
}

/// Repository whose inserts wait until the test releases them.
struct GatedRepository {
    inner: Arc<dyn MomentRepository>,
    release: Mutex<mpsc::Receiver<()>>,
}

impl MomentRepository for GatedRepository {
    fn insert_moment(&self, moment: &Moment) -> MutationOutcome {
        if let Ok(release) = self.release.lock() {
            let _ = release.recv();
        }
        self.inner.insert_moment(moment)
    }

    fn edit_moment(&self, current_title: &str, new_moment: &Moment) -> MutationOutcome {
        self.inner.edit_moment(current_title, new_moment)
    }

    fn delete_moment(&self, title: &str) -> MutationOutcome {
        self.inner.delete_moment(title)
    }

    fn load_all_moments(&self) -> LoadOutcome<Vec<Moment>> {
        self.inner.load_all_moments()
    }

    fn load_moments_by_category(&self, tag: CategoryTag) -> LoadOutcome<Vec<Moment>> {
        self.inner.load_moments_by_category(tag)
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn second_confirm_while_committing_is_rejected() {
    let backing = app();
    let (release_tx, release_rx) = mpsc::channel();
    let app = MomentsApp::with_repository(
        Arc::new(GatedRepository {
            inner: backing.repository(),
            release: Mutex::new(release_rx),
        }),
        Strings::default(),
        Handle::current(),
    );
    let holder = app.create_edit(CreateEditParams::default());
    holder.on_title_changed("Trip");
    holder.on_category_selected(CategoryTag::Family);

    let first = holder.confirm(ConfirmAction::Create).unwrap();
    assert_eq!(
        holder.snapshot().phase,
        ConfirmPhase::Committing(ConfirmAction::Create)
    );
    assert!(holder.confirm(ConfirmAction::Create).is_none());

    app.watch_navigator().alert(None);
    holder.on_create_clicked();
    assert_eq!(app.watch_navigator().current_alert(), None);

    release_tx.send(()).unwrap();
    let outcome = first.await.unwrap();
    assert!(matches!(
        outcome,
        CommitOutcome::Committed(MutationOutcome::Applied)
    ));
    assert_eq!(backing.repository().get_all_moments().len(), 1);
    assert_eq!(holder.snapshot().phase, ConfirmPhase::Idle);
}
