//! Moment domain model.
//!
//! # Responsibility
//! - Define the single persisted record of the app.
//!
//! # Invariants
//! - `id` is generated once at creation and never reassigned.
//! - Edits replace `title` and `category_tag` wholesale; `id` survives.

use crate::model::category_tag::CategoryTag;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a moment, stored as its hyphenated string form.
pub type MomentId = Uuid;

/// A short titled note tagged with one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moment {
    pub id: MomentId,
    pub title: String,
    pub category_tag: CategoryTag,
}

impl Moment {
    /// Creates a moment with a freshly generated id.
    pub fn new(title: impl Into<String>, category_tag: CategoryTag) -> Self {
        Self::with_id(Uuid::new_v4(), title, category_tag)
    }

    /// Creates a moment with a caller-provided id.
    ///
    /// Used when overwriting an existing row so the stored id is preserved.
    pub fn with_id(id: MomentId, title: impl Into<String>, category_tag: CategoryTag) -> Self {
        Self {
            id,
            title: title.into(),
            category_tag,
        }
    }

    /// Avatar text for list rows: first two characters upper-cased, or the
    /// whole title unchanged when it is shorter than two characters.
    pub fn initials(&self) -> String {
        if self.title.chars().count() >= 2 {
            self.title.chars().take(2).collect::<String>().to_uppercase()
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Moment;
    use crate::model::category_tag::CategoryTag;

    #[test]
    fn new_generates_distinct_ids() {
        let first = Moment::new("a", CategoryTag::Love);
        let second = Moment::new("a", CategoryTag::Love);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn initials_take_two_chars_uppercased() {
        assert_eq!(Moment::new("trip", CategoryTag::Family).initials(), "TR");
        assert_eq!(Moment::new("x", CategoryTag::Family).initials(), "x");
        assert_eq!(Moment::new("", CategoryTag::Family).initials(), "");
    }

    #[test]
    fn with_id_keeps_given_id() {
        let original = Moment::new("old", CategoryTag::Tech);
        let replaced = Moment::with_id(original.id, "new", CategoryTag::Music);
        assert_eq!(replaced.id, original.id);
        assert_eq!(replaced.title, "new");
    }
}
