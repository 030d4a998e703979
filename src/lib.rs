//! A small mutable person record with a process-wide list of suggested names,
//! optional validation and JSON conversion.

pub mod config;
pub mod error;
pub mod models;

// Re-export the most common types for easier use
pub use config::PersonConfig;
pub use error::{PersonError, Result};
pub use models::person::{Person, SUGGESTED_NAMES};
pub use models::serde::{from_json, from_json_validated, to_json, to_json_pretty};
pub use models::traits::EntityModel;
