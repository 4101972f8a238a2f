//! Route names and parameter encoding.
//!
//! # Invariants
//! - The create/edit route carries at most two query parameters: `title`
//!   (percent-encoded) and `categoryId` (omitted when negative).
//! - Decoding is lenient: missing or malformed parameters fall back to
//!   "no title" and `NO_CATEGORY_ID`.

use crate::model::category_tag::{CategoryTag, NO_CATEGORY_ID};
use crate::navigation::action::{NavOptions, NavigationAction};

/// Moment list.
pub const HOME_SCREEN: &str = "homeScreen";
/// Create/edit screen base route.
pub const CREATE_EDIT_MOMENT_ROUTE: &str = "create_edit_moment_screen";
/// Route pattern registered with the presentation layer.
pub const CREATE_EDIT_MOMENT_SCREEN_WITH_PARAMS: &str =
    "create_edit_moment_screen?title={title}&categoryId={categoryId}";

pub const PARAM_TITLE: &str = "title";
pub const PARAM_CATEGORY_ID: &str = "categoryId";

/// Builds the navigation request for the create/edit screen.
///
/// `title = None` and a negative `category_id` open the screen in create mode.
pub fn create_edit_moment(title: Option<&str>, category_id: i32) -> NavigationAction {
    let mut params = Vec::with_capacity(2);
    if let Some(title) = title {
        params.push(format!("{PARAM_TITLE}={}", urlencoding::encode(title)));
    }
    if category_id >= 0 {
        params.push(format!("{PARAM_CATEGORY_ID}={category_id}"));
    }

    let destination = if params.is_empty() {
        CREATE_EDIT_MOMENT_ROUTE.to_string()
    } else {
        format!("{CREATE_EDIT_MOMENT_ROUTE}?{}", params.join("&"))
    };

    NavigationAction::new(destination).with_options(NavOptions::fade())
}

/// Arguments the create/edit screen is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEditParams {
    pub title: Option<String>,
    pub category_id: i32,
}

impl Default for CreateEditParams {
    fn default() -> Self {
        Self {
            title: None,
            category_id: NO_CATEGORY_ID,
        }
    }
}

impl CreateEditParams {
    pub fn new(title: Option<String>, category_id: i32) -> Self {
        Self { title, category_id }
    }

    /// Params for editing an existing moment.
    pub fn edit(title: impl Into<String>, tag: CategoryTag) -> Self {
        Self::new(Some(title.into()), tag.type_id())
    }

    /// Decodes params from an encoded create/edit destination.
    ///
    /// Returns `None` when `route` points somewhere else.
    pub fn from_route(route: &str) -> Option<Self> {
        let (path, query) = match route.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (route, None),
        };
        if path != CREATE_EDIT_MOMENT_ROUTE {
            return None;
        }

        let mut params = Self::default();
        for pair in query.into_iter().flat_map(|query| query.split('&')) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                PARAM_TITLE => {
                    let decoded = urlencoding::decode(value)
                        .map(|value| value.into_owned())
                        .unwrap_or_else(|_| value.to_string());
                    params.title = Some(decoded);
                }
                PARAM_CATEGORY_ID => {
                    params.category_id = value.parse().unwrap_or(NO_CATEGORY_ID);
                }
                _ => {}
            }
        }
        Some(params)
    }

    /// Title the screen opened with; empty in create mode.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Category the screen opened with, `None` for the sentinel.
    pub fn category_tag(&self) -> Option<CategoryTag> {
        CategoryTag::from_param(self.category_id)
    }

    /// Edit mode requires both an existing title and a category.
    pub fn is_edit(&self) -> bool {
        !self.title_or_empty().is_empty() && self.category_id != NO_CATEGORY_ID
    }
}
