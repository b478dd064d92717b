//! Integration test suite for the record binder.
//!
//! Organized by concern:
//! - positional binding and skip semantics
//! - explicit name tables
//! - custom converter registration
//! - the nullable wrapper family
//! - shared-binder concurrency

pub mod concurrency;
pub mod helpers;
pub mod name_table;
pub mod nullable_values;
