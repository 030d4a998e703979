//! Configuration for person record validation.

use serde::{Deserialize, Serialize};

/// Validation policy applied by the fallible `Person` operations
///
/// The plain constructor and setters ignore this entirely. The default policy
/// accepts everything, so `try_*` calls only reject when a rule is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    /// Reject ages below zero
    pub reject_negative_age: bool,
    /// Reject names that are empty
    pub reject_empty_name: bool,
}

impl PersonConfig {
    /// Policy with every rule enabled
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            reject_negative_age: true,
            reject_empty_name: true,
        }
    }

    /// Whether any rule is enabled
    #[must_use]
    pub const fn is_permissive(&self) -> bool {
        !self.reject_negative_age && !self.reject_empty_name
    }
}
