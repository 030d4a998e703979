//! Domain models
//!
//! This module contains the `Person` record, its JSON conversion helpers
//! and the traits shared by keyed records.

pub mod person;
pub mod serde;
pub mod traits;

pub use person::{Person, SUGGESTED_NAMES};
pub use traits::EntityModel;
