//! Trait definitions for domain models

use std::hash::Hash;

/// A trait for records that can be looked up by an identifier.
///
/// The identifier is not guaranteed unique across instances. `key` gives a
/// string form that callers can use for maps and log lines.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the identifier for this model
    fn id(&self) -> &Self::Id;

    /// Create a key string representation of this model
    fn key(&self) -> String;
}
