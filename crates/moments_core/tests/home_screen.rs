use moments_core::navigation::routes::CREATE_EDIT_MOMENT_ROUTE;
use moments_core::{
    CategoryTag, HomeState, LoadOutcome, Moment, MomentRepository, MomentsApp, MutationOutcome,
    NavOptions, RepoError, Strings,
};
use std::sync::Arc;
use tokio::runtime::Handle;

#[tokio::test(flavor = "multi_thread")]
async fn refresh_on_empty_store_publishes_empty_state() {
    let app = MomentsApp::in_memory(Handle::current()).unwrap();
    let home = app.home();

    home.refresh().await.unwrap();
    assert_eq!(home.snapshot(), HomeState::default());
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_publishes_moments_in_storage_order() {
    let app = MomentsApp::in_memory(Handle::current()).unwrap();
    let first = Moment::new("Trip", CategoryTag::Family);
    let second = Moment::new("Concert", CategoryTag::Music);
    app.repository().insert_moment(&first);
    app.repository().insert_moment(&second);

    let home = app.home();
    let mut rx = home.state();
    home.refresh().await.unwrap();

    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.moments, vec![first, second]);
    assert!(!state.load_failed);
}

#[tokio::test(flavor = "multi_thread")]
async fn item_click_requests_edit_route_with_fade() {
    let app = MomentsApp::in_memory(Handle::current()).unwrap();
    let home = app.home();

    home.on_item_clicked("Trip", CategoryTag::Family.type_id());

    let action = app.watch_navigator().current_nav_action().unwrap();
    assert_eq!(
        action.destination,
        format!("{CREATE_EDIT_MOMENT_ROUTE}?title=Trip&categoryId=0")
    );
    assert_eq!(action.options, NavOptions::fade());

    let holder = app.create_edit_for_route(&action.destination).unwrap();
    assert!(holder.is_editing());
    assert_eq!(holder.snapshot().title, "Trip");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_click_requests_bare_route() {
    let app = MomentsApp::in_memory(Handle::current()).unwrap();
    app.home().on_create_clicked();

    let action = app.watch_navigator().current_nav_action().unwrap();
    assert_eq!(action.destination, CREATE_EDIT_MOMENT_ROUTE);
    assert!(!app.create_edit_for_route(&action.destination).unwrap().is_editing());
}

struct FailingRepository;

impl MomentRepository for FailingRepository {
    fn insert_moment(&self, _moment: &Moment) -> MutationOutcome {
        MutationOutcome::Failed(RepoError::LockPoisoned)
    }

    fn edit_moment(&self, _current_title: &str, _new_moment: &Moment) -> MutationOutcome {
        MutationOutcome::Failed(RepoError::LockPoisoned)
    }

    fn delete_moment(&self, _title: &str) -> MutationOutcome {
        MutationOutcome::Failed(RepoError::LockPoisoned)
    }

    fn load_all_moments(&self) -> LoadOutcome<Vec<Moment>> {
        LoadOutcome::Failed(RepoError::LockPoisoned)
    }

    fn load_moments_by_category(&self, _tag: CategoryTag) -> LoadOutcome<Vec<Moment>> {
        LoadOutcome::Failed(RepoError::LockPoisoned)
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn refresh_flags_storage_fault() {
    let app = MomentsApp::with_repository(
        Arc::new(FailingRepository),
        Strings::default(),
        Handle::current(),
    );
    let home = app.home();

    home.refresh().await.unwrap();
    let state = home.snapshot();
    assert!(state.moments.is_empty());
    assert!(state.load_failed);
}
