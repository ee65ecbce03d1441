//! Lead-capture endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("tessera/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadsConfig {
    /// Endpoint the CTA form posts to. Empty means lead capture is off.
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for LeadsConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl LeadsConfig {
    /// Check if an endpoint is set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
    }

    /// Check the section is usable for submissions.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` without an endpoint, and
    /// `ConfigError::InvalidValue` for a non-HTTP endpoint or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "leads".into(),
            });
        }
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "leads.endpoint".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.endpoint),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "leads.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = LeadsConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("tessera/"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { section }) if section == "leads"
        ));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = LeadsConfig {
            endpoint: "ftp://leads.example.com".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "leads.endpoint"
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = LeadsConfig {
            endpoint: "https://leads.example.com/api".into(),
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "leads.timeout_secs"
        ));
    }

    #[test]
    fn accepts_https_endpoint() {
        let config = LeadsConfig {
            endpoint: "https://leads.example.com/api".into(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
