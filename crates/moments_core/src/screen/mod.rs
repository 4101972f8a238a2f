//! Screen state holders.
//!
//! # Responsibility
//! - Hold one immutable snapshot per screen and publish replacements.
//! - Translate user intents into repository calls and navigator requests.
//!
//! # Invariants
//! - Holders never touch storage on the caller's thread.
//! - Holders reach the navigator and repository only through injected
//!   trait objects.

pub mod create_edit;
pub mod home;
