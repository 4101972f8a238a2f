//! Category tag model.
//!
//! # Responsibility
//! - Define the closed set of categories a moment can carry.
//! - Map each category to its stable storage identifier and display title.
//!
//! # Invariants
//! - `type_id` values are unique per variant and never renumbered; they are
//!   the on-disk representation in `moments.category_tag`.
//! - Integer conversion is total: unknown identifiers resolve to `Other`.

use serde::{Deserialize, Serialize};

/// Sentinel used by routes and screen params for "no category selected".
pub const NO_CATEGORY_ID: i32 = -1;

/// Category attached to every moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryTag {
    Family,
    Love,
    Music,
    Tech,
    JustMe,
    Other,
}

impl CategoryTag {
    /// Every category in identifier order. This is also the picker order.
    pub const ALL: [CategoryTag; 6] = [
        CategoryTag::Family,
        CategoryTag::Love,
        CategoryTag::Music,
        CategoryTag::Tech,
        CategoryTag::JustMe,
        CategoryTag::Other,
    ];

    /// Human-readable label shown in lists and the category picker.
    pub fn title(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Love => "Love",
            Self::Music => "Music",
            Self::Tech => "Tech",
            Self::JustMe => "Just Me",
            Self::Other => "Other",
        }
    }

    /// Stable integer identifier persisted in storage and passed in routes.
    pub fn type_id(self) -> i32 {
        match self {
            Self::Family => 0,
            Self::Love => 1,
            Self::Music => 2,
            Self::Tech => 3,
            Self::JustMe => 4,
            Self::Other => 5,
        }
    }

    /// Resolves a stored identifier. Never fails; unmapped values map to `Other`.
    pub fn from_type_id(id: i32) -> Self {
        match id {
            0 => Self::Family,
            1 => Self::Love,
            2 => Self::Music,
            3 => Self::Tech,
            4 => Self::JustMe,
            _ => Self::Other,
        }
    }

    /// Resolves a screen/route parameter where `-1` means "nothing selected".
    pub fn from_param(id: i32) -> Option<Self> {
        if id == NO_CATEGORY_ID {
            None
        } else {
            Some(Self::from_type_id(id))
        }
    }
}

impl std::fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryTag, NO_CATEGORY_ID};

    #[test]
    fn all_is_ordered_by_type_id() {
        for (index, tag) in CategoryTag::ALL.iter().enumerate() {
            assert_eq!(tag.type_id(), index as i32);
        }
    }

    #[test]
    fn from_param_treats_sentinel_as_unselected() {
        assert_eq!(CategoryTag::from_param(NO_CATEGORY_ID), None);
        assert_eq!(CategoryTag::from_param(2), Some(CategoryTag::Music));
        assert_eq!(CategoryTag::from_param(-7), Some(CategoryTag::Other));
    }

    #[test]
    fn display_uses_title() {
        assert_eq!(CategoryTag::JustMe.to_string(), "Just Me");
    }
}
