use crate::config::Config;
use crate::errors::AppError;
use crate::models::{VerifyVpaRequest, VpaDetails};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use std::time::Duration;

pub const NO_VPA_DATA: &str = "No VPA data found";

/// Client for the VPA verification provider.
#[derive(Clone)]
pub struct VpaClient {
    client: reqwest::Client,
    verify_url: String,
    token: String,
    user_agent: String,
}

impl VpaClient {
    /// Creates a new `VpaClient`.
    ///
    /// # Arguments
    ///
    /// * `verify_url` - Full URL of the verification endpoint.
    /// * `token` - Provider token, sent as `authorization: Token <token>`.
    /// * `user_agent` - Device-identifying user agent expected by the provider.
    /// * `timeout` - Per-call timeout.
    pub fn new(
        verify_url: String,
        token: String,
        user_agent: String,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to create VPA client: {}", e)))?;

        Ok(Self {
            client,
            verify_url,
            token,
            user_agent,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.vpa_verify_url.clone(),
            config.vpa_auth_token.clone(),
            config.vpa_user_agent.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    /// Resolves a UPI identifier to its verification record.
    ///
    /// # Returns
    ///
    /// * `Ok(VpaDetails)` - The provider returned a verification record.
    /// * `Err(AppError::NotFound)` - The record was empty or absent.
    /// * `Err(AppError::Upstream)` - Network error, timeout, non-2xx status
    ///   or a body that is not JSON.
    pub async fn resolve(&self, upi_id: &str) -> Result<VpaDetails, AppError> {
        let payload = VerifyVpaRequest::for_upi_id(upi_id);
        tracing::info!("Verifying VPA {} via {}", upi_id, self.verify_url);

        let response = self
            .client
            .post(&self.verify_url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Token {}", self.token))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;

        let record = body.get("data").and_then(|d| d.get("verify_vpa_resp"));
        let details = VpaDetails::from_record(record).ok_or_else(|| {
            tracing::info!("No verification record for {}", upi_id);
            AppError::NotFound(NO_VPA_DATA.to_string())
        })?;

        tracing::info!(
            "✓ VPA resolved: {} (ifsc: {})",
            details.vpa.as_deref().unwrap_or("-"),
            details.ifsc.as_deref().unwrap_or("-")
        );
        Ok(details)
    }
}
