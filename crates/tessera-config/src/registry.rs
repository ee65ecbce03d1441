//! Registry configuration.

use serde::{Deserialize, Serialize};
use tessera_core::DuplicatePolicy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// What to do when a section name is registered twice.
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_reject() {
        assert_eq!(RegistryConfig::default().duplicate_policy, DuplicatePolicy::Reject);
    }
}
