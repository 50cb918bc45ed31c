//! HTTP client for the messaging service account endpoints.

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use courier_core::accounts::AccountExistenceChecker;
use courier_core::ServiceId;

use crate::config::MessagingConfig;
use crate::error::{MessagingError, Result};

/// Path of the unauthenticated account-existence endpoint.
const ACCOUNT_EXISTENCE_PATH: &str = "/v1/accounts/account";

/// Client for the messaging service REST API.
#[derive(Debug, Clone)]
pub struct MessagingClient {
    client: reqwest::Client,
    base_url: String,
}

impl MessagingClient {
    /// Create a new messaging client from configuration.
    pub fn new(config: &MessagingConfig) -> Result<Self> {
        if !config.is_enabled() {
            return Err(MessagingError::invalid_config("service URL is empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn account_existence_url(&self, service_id: &ServiceId) -> String {
        format!("{}{}/{}", self.base_url, ACCOUNT_EXISTENCE_PATH, service_id)
    }

    /// Checks whether an account exists.
    ///
    /// HEAD /v1/accounts/account/{uuid}
    pub async fn account_exists(&self, service_id: &ServiceId) -> Result<bool> {
        let url = self.account_existence_url(service_id);

        let response = self.client.head(&url).send().await?;
        let status = response.status();
        debug!("Account existence response: {}", status);

        existence_from_status(status)
    }
}

/// Maps the endpoint's status code to an existence answer.
fn existence_from_status(status: StatusCode) -> Result<bool> {
    if status.is_success() {
        return Ok(true);
    }
    if status == StatusCode::NOT_FOUND {
        return Ok(false);
    }
    Err(MessagingError::api(
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unexpected status"),
    ))
}

#[async_trait]
impl AccountExistenceChecker for MessagingClient {
    async fn check_account_existence(&self, service_id: &ServiceId) -> courier_core::Result<bool> {
        Ok(self.account_exists(service_id).await?)
    }
}
