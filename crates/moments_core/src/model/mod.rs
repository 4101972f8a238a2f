//! Domain model for moments.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every moment is identified by a stable `MomentId`.
//! - Category identifiers are fixed and double as the storage encoding.

pub mod category_tag;
pub mod moment;
