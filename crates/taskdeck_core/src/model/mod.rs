//! Domain model for users, projects and tasks.
//!
//! # Responsibility
//! - Define the canonical entity types and their serializable record twins.
//! - Enforce field invariants at construction and at every mutation.
//!
//! # Invariants
//! - An entity value in memory always satisfies its field invariants; there
//!   is no way to construct or mutate one into an invalid state.
//! - Every decode path re-validates by converting through the record twin.

pub mod fields;
pub mod project;
pub mod task;
pub mod user;
