use crate::config::Config;
use crate::errors::AppError;
use reqwest::Url;
use serde_json::{json, Value};
use std::time::Duration;

/// Outcome of a best-effort bank lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum BankLookup {
    /// Raw JSON body returned by the provider.
    Found(Value),
    /// Network error, timeout or a body that is not JSON.
    Failed,
}

impl BankLookup {
    /// Payload placed under `bank_details_raw`.
    pub fn into_payload(self) -> Value {
        match self {
            BankLookup::Found(body) => body,
            BankLookup::Failed => json!({"warning": "Bank lookup failed"}),
        }
    }
}

/// Client for the public IFSC lookup service.
#[derive(Clone)]
pub struct IfscClient {
    client: reqwest::Client,
    base_url: String,
}

impl IfscClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create IFSC client: {}", e))
            })?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.ifsc_base_url.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    /// Builds `<base_url>/<ifsc>` with the code as a single encoded segment.
    fn lookup_url(&self, ifsc: &str) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut().ok()?.pop_if_empty().push(ifsc);
        Some(url)
    }

    /// Fetches bank metadata for an IFSC code.
    ///
    /// Never fails: every error is folded into [`BankLookup::Failed`]. A JSON
    /// body is passed through even on a non-2xx status, since the provider
    /// answers unknown codes with a JSON message.
    pub async fn lookup(&self, ifsc: &str) -> BankLookup {
        let Some(url) = self.lookup_url(ifsc) else {
            tracing::warn!("Cannot build IFSC lookup URL from {}", self.base_url);
            return BankLookup::Failed;
        };

        tracing::info!("Fetching bank details for IFSC {}", ifsc);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("IFSC lookup for {} failed: {}", ifsc, e);
                return BankLookup::Failed;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("IFSC lookup for {} returned {}", ifsc, status);
        }

        match response.json::<Value>().await {
            Ok(body) => BankLookup::Found(body),
            Err(e) => {
                tracing::warn!("IFSC lookup for {} returned an unreadable body: {}", ifsc, e);
                BankLookup::Failed
            }
        }
    }
}
