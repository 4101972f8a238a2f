//! Alert value objects broadcast through the navigator.
//!
//! An alert lives for one presentation cycle: the presenter shows it, runs at
//! most one button callback, then clears the navigator's alert slot.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Shareable UI callback.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// One alert button: its label and an optional action.
#[derive(Clone)]
pub struct AlertButton {
    pub text: String,
    pub on_click: Option<Callback>,
}

impl AlertButton {
    /// A button that only dismisses the alert.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            on_click: None,
        }
    }

    pub fn with_action(text: impl Into<String>, on_click: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            text: text.into(),
            on_click: Some(Arc::new(on_click)),
        }
    }

    /// Runs the button action, if any.
    pub fn click(&self) {
        if let Some(on_click) = &self.on_click {
            on_click();
        }
    }
}

impl Debug for AlertButton {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertButton")
            .field("text", &self.text)
            .field("has_action", &self.on_click.is_some())
            .finish()
    }
}

impl PartialEq for AlertButton {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && same_callback(&self.on_click, &other.on_click)
    }
}

/// Transient dialog request.
#[derive(Clone)]
pub struct Alert {
    pub title: String,
    pub description: Option<String>,
    pub confirm_button: Option<AlertButton>,
    pub dismiss_button: Option<AlertButton>,
    /// Runs when the alert is dismissed without pressing a button.
    pub on_dismiss: Option<Callback>,
}

impl Alert {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            confirm_button: None,
            dismiss_button: None,
            on_dismiss: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn confirm_button(mut self, button: AlertButton) -> Self {
        self.confirm_button = Some(button);
        self
    }

    pub fn dismiss_button(mut self, button: AlertButton) -> Self {
        self.dismiss_button = Some(button);
        self
    }

    pub fn on_dismiss(mut self, on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Arc::new(on_dismiss));
        self
    }

    /// Presses the confirm button, if present.
    pub fn confirm(&self) {
        if let Some(button) = &self.confirm_button {
            button.click();
        }
    }

    /// Presses the dismiss button, if present.
    pub fn dismiss(&self) {
        if let Some(button) = &self.dismiss_button {
            button.click();
        }
    }

    /// Closes the alert from outside its buttons (back press, outside tap).
    pub fn dismissed(&self) {
        if let Some(on_dismiss) = &self.on_dismiss {
            on_dismiss();
        }
    }
}

impl Debug for Alert {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("confirm_button", &self.confirm_button)
            .field("dismiss_button", &self.dismiss_button)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

impl PartialEq for Alert {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.confirm_button == other.confirm_button
            && self.dismiss_button == other.dismiss_button
            && same_callback(&self.on_dismiss, &other.on_dismiss)
    }
}

fn same_callback(left: &Option<Callback>, right: &Option<Callback>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => Arc::ptr_eq(left, right),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{Alert, AlertButton};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn confirm_runs_only_confirm_action() {
        let confirmed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&confirmed);
        let alert = Alert::new("Creating Moment")
            .confirm_button(AlertButton::with_action("Yes", move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .dismiss_button(AlertButton::new("No"));

        alert.dismiss();
        assert_eq!(confirmed.load(Ordering::SeqCst), 0);
        alert.confirm();
        assert_eq!(confirmed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clones_are_equal_but_distinct_actions_are_not() {
        let alert = Alert::new("t").confirm_button(AlertButton::with_action("Yes", || {}));
        assert_eq!(alert.clone(), alert);

        let other = Alert::new("t").confirm_button(AlertButton::with_action("Yes", || {}));
        assert_ne!(alert, other);
        assert_eq!(Alert::new("t").description("d"), Alert::new("t").description("d"));
    }
}
