//! Duplicate-name policy shared by the registry and configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the registry does when a component name is registered twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first registration and report a conflict.
    #[default]
    Reject,
    /// Replace the earlier entry in place and log a warning.
    Overwrite,
}

impl DuplicatePolicy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Overwrite => "overwrite",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
