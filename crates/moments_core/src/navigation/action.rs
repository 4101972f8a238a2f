//! Navigation requests emitted toward the presentation layer.

/// Screen transition animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    FadeIn,
    FadeOut,
}

/// Presentation options attached to a navigation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub enter: Option<Transition>,
    pub exit: Option<Transition>,
    pub pop_enter: Option<Transition>,
    pub pop_exit: Option<Transition>,
}

impl NavOptions {
    /// Fade in on enter and pop-enter, fade out on exit and pop-exit.
    pub fn fade() -> Self {
        Self {
            enter: Some(Transition::FadeIn),
            exit: Some(Transition::FadeOut),
            pop_enter: Some(Transition::FadeIn),
            pop_exit: Some(Transition::FadeOut),
        }
    }
}

/// One pending screen transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationAction {
    /// Fully encoded route, including query parameters.
    pub destination: String,
    pub options: NavOptions,
}

impl NavigationAction {
    pub fn new(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            options: NavOptions::default(),
        }
    }

    pub fn with_options(mut self, options: NavOptions) -> Self {
        self.options = options;
        self
    }
}
