//! HTTP transport for lead submissions.

use std::future::Future;
use std::time::Duration;

use tessera_config::LeadsConfig;

use crate::error::LeadError;
use crate::http::check_response;
use crate::submission::LeadSubmission;

/// Sends one lead to wherever leads go.
///
/// [`LeadForm::submit`](crate::LeadForm::submit) is generic over this so the
/// form state can be driven without a network.
pub trait LeadTransport {
    /// Deliver one submission. Called once per explicit user submit.
    fn submit(&self, lead: &LeadSubmission) -> impl Future<Output = Result<(), LeadError>> + Send;
}

/// Posts leads as JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct LeadClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LeadClient {
    /// Build a client from the `leads` config section.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Config`] if the section is not configured or
    /// invalid, and [`LeadError::Http`] if the HTTP client fails to build.
    pub fn from_config(config: &LeadsConfig) -> Result<Self, LeadError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LeadTransport for LeadClient {
    async fn submit(&self, lead: &LeadSubmission) -> Result<(), LeadError> {
        tracing::debug!(endpoint = %self.endpoint, "submitting lead");
        check_response(self.http.post(&self.endpoint).json(lead).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_config::ConfigError;

    #[test]
    fn unconfigured_section_is_rejected() {
        let err = LeadClient::from_config(&LeadsConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            LeadError::Config(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn configured_section_builds() {
        let config = LeadsConfig {
            endpoint: "https://leads.example.com/api".into(),
            ..Default::default()
        };
        let client = LeadClient::from_config(&config).unwrap();
        assert_eq!(client.endpoint(), "https://leads.example.com/api");
    }
}
