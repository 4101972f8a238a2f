//! Navigation coordination between screen holders and the presenter.
//!
//! # Responsibility
//! - Define alert and navigation request values.
//! - Provide the broadcast `Navigator` and route encoding helpers.

pub mod action;
pub mod alert;
pub mod navigator;
pub mod routes;
