//! Process-wide navigation and dialog broadcast hub.
//!
//! # Responsibility
//! - Carry four independent pieces of transient UI state from screen holders
//!   to the presentation layer: pending alert, pending navigation, pending
//!   pop route and the blocking-progress flag.
//!
//! # Invariants
//! - Each slot holds only its latest value; there is no history or queue.
//! - A new subscriber observes the current value immediately.
//! - Setters never fail, with or without subscribers. Concurrent writers
//!   resolve by last write wins.
//! - Consumers reset `nav` and `pop` slots to `None` after acting on them.

use crate::navigation::action::NavigationAction;
use crate::navigation::alert::Alert;
use log::debug;
use tokio::sync::watch;

/// Navigation capability handed to screen holders and the presenter.
pub trait Navigator: Send + Sync {
    /// Shows `alert`, replacing any visible alert; `None` dismisses.
    fn alert(&self, alert: Option<Alert>);
    /// Requests one screen transition; `None` marks it consumed.
    fn navigate(&self, action: Option<NavigationAction>);
    /// Requests popping the back stack to `route`; `None` marks it consumed.
    fn pop(&self, route: Option<String>);
    fn enable_progress(&self);
    fn disable_progress(&self);

    fn alert_actions(&self) -> watch::Receiver<Option<Alert>>;
    fn nav_actions(&self) -> watch::Receiver<Option<NavigationAction>>;
    fn pop_route_actions(&self) -> watch::Receiver<Option<String>>;
    fn progress_actions(&self) -> watch::Receiver<bool>;
}

/// `Navigator` backed by one `tokio::sync::watch` channel per slot.
pub struct WatchNavigator {
    alert_tx: watch::Sender<Option<Alert>>,
    nav_tx: watch::Sender<Option<NavigationAction>>,
    pop_tx: watch::Sender<Option<String>>,
    progress_tx: watch::Sender<bool>,
}

impl WatchNavigator {
    pub fn new() -> Self {
        Self {
            alert_tx: watch::Sender::new(None),
            nav_tx: watch::Sender::new(None),
            pop_tx: watch::Sender::new(None),
            progress_tx: watch::Sender::new(false),
        }
    }

    /// Current alert without subscribing.
    pub fn current_alert(&self) -> Option<Alert> {
        self.alert_tx.borrow().clone()
    }

    pub fn current_nav_action(&self) -> Option<NavigationAction> {
        self.nav_tx.borrow().clone()
    }

    pub fn current_pop_route(&self) -> Option<String> {
        self.pop_tx.borrow().clone()
    }

    pub fn is_progress_visible(&self) -> bool {
        *self.progress_tx.borrow()
    }
}

impl Default for WatchNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for WatchNavigator {
    fn alert(&self, alert: Option<Alert>) {
        debug!(
            "event=nav_alert module=navigation status=ok visible={}",
            alert.is_some()
        );
        self.alert_tx.send_replace(alert);
    }

    fn navigate(&self, action: Option<NavigationAction>) {
        if let Some(action) = &action {
            debug!(
                "event=nav_navigate module=navigation status=ok destination={}",
                route_path(&action.destination)
            );
        }
        self.nav_tx.send_replace(action);
    }

    fn pop(&self, route: Option<String>) {
        if let Some(route) = &route {
            debug!("event=nav_pop module=navigation status=ok route={route}");
        }
        self.pop_tx.send_replace(route);
    }

    fn enable_progress(&self) {
        self.progress_tx.send_replace(true);
    }

    fn disable_progress(&self) {
        self.progress_tx.send_replace(false);
    }

    fn alert_actions(&self) -> watch::Receiver<Option<Alert>> {
        self.alert_tx.subscribe()
    }

    fn nav_actions(&self) -> watch::Receiver<Option<NavigationAction>> {
        self.nav_tx.subscribe()
    }

    fn pop_route_actions(&self) -> watch::Receiver<Option<String>> {
        self.pop_tx.subscribe()
    }

    fn progress_actions(&self) -> watch::Receiver<bool> {
        self.progress_tx.subscribe()
    }
}

// Query strings can carry moment titles; keep them out of logs.
fn route_path(destination: &str) -> &str {
    destination
        .split_once('?')
        .map_or(destination, |(path, _)| path)
}

#[cfg(test)]
mod tests {
    use super::{route_path, Navigator, WatchNavigator};
    use crate::navigation::alert::Alert;

    #[test]
    fn setters_work_without_subscribers() {
        let navigator = WatchNavigator::new();
        navigator.alert(Some(Alert::new("hello")));
        navigator.pop(Some("homeScreen".to_string()));
        navigator.enable_progress();

        assert_eq!(navigator.current_alert(), Some(Alert::new("hello")));
        assert_eq!(navigator.current_pop_route().as_deref(), Some("homeScreen"));
        assert!(navigator.is_progress_visible());
    }

    #[test]
    fn route_path_strips_query() {
        assert_eq!(route_path("a?title=secret"), "a");
        assert_eq!(route_path("homeScreen"), "homeScreen");
    }
}
