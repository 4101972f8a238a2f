//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - `moment_dao`: raw table access (the persistence port).
//! - `moment_repository`: screen-facing CRUD with title lookups and fault
//!   absorption.
//!
//! # Invariants
//! - DAO APIs return semantic errors (`NotFound`) in addition to transport
//!   errors; repository APIs return outcomes and never errors.

pub mod moment_dao;
pub mod moment_repository;
