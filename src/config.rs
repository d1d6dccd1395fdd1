use std::collections::HashMap;

pub const DEFAULT_VPA_VERIFY_URL: &str = "https://halfblood.famapp.in/vpa/verifyExt";
pub const DEFAULT_IFSC_BASE_URL: &str = "https://ifsc.razorpay.com/";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub vpa_verify_url: String,
    pub ifsc_base_url: String,
    pub vpa_auth_token: String,
    pub vpa_user_agent: String,
    pub upstream_timeout_secs: u64,
    /// API key -> role label.
    pub api_keys: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            vpa_verify_url: validate_http_url(
                "VPA_VERIFY_URL",
                std::env::var("VPA_VERIFY_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_VPA_VERIFY_URL.to_string()),
            )?,
            ifsc_base_url: validate_http_url(
                "IFSC_BASE_URL",
                std::env::var("IFSC_BASE_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_IFSC_BASE_URL.to_string()),
            )?,
            vpa_auth_token: std::env::var("VPA_AUTH_TOKEN")
                .map_err(|_| anyhow::anyhow!("VPA_AUTH_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("VPA_AUTH_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
            vpa_user_agent: std::env::var("VPA_USER_AGENT")
                .map_err(|_| anyhow::anyhow!("VPA_USER_AGENT environment variable required"))
                .and_then(|agent| {
                    if agent.trim().is_empty() {
                        anyhow::bail!("VPA_USER_AGENT cannot be empty");
                    }
                    Ok(agent)
                })?,
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .map_err(|_| anyhow::anyhow!("UPSTREAM_TIMEOUT_SECS must be a positive integer"))
                .and_then(|secs| {
                    if secs == 0 {
                        anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than zero");
                    }
                    Ok(secs)
                })?,
            api_keys: std::env::var("API_KEYS")
                .map_err(|_| anyhow::anyhow!("API_KEYS environment variable required"))
                .and_then(|raw| parse_api_keys(&raw))?,
        };

        // Never log the token or the keys themselves
        tracing::info!(
            "Configuration loaded successfully ({} API keys)",
            config.api_keys.len()
        );
        tracing::debug!("VPA verify URL: {}", config.vpa_verify_url);
        tracing::debug!("IFSC base URL: {}", config.ifsc_base_url);
        tracing::debug!("Upstream timeout: {}s", config.upstream_timeout_secs);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}

/// Parses the `API_KEYS` allowlist.
///
/// Format: `key:Role Label` pairs separated by commas, e.g.
/// `456:Premium User,ops-key:Admin`. Whitespace around keys and roles is
/// trimmed and empty entries are skipped.
pub fn parse_api_keys(raw: &str) -> anyhow::Result<HashMap<String, String>> {
    let mut keys = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (key, role) = entry
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("API_KEYS entry '{}' must be key:role", entry))?;
        let (key, role) = (key.trim(), role.trim());

        if key.is_empty() {
            anyhow::bail!("API_KEYS entry has an empty key");
        }
        if role.is_empty() {
            anyhow::bail!("API_KEYS entry for a key has an empty role");
        }
        if keys.insert(key.to_string(), role.to_string()).is_some() {
            anyhow::bail!("API_KEYS contains a duplicate key");
        }
    }

    if keys.is_empty() {
        anyhow::bail!("API_KEYS must contain at least one key:role entry");
    }

    Ok(keys)
}

/// Rejects anything that is not an absolute http(s) URL.
fn validate_http_url(var: &str, url: String) -> anyhow::Result<String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", var);
    }
    url::Url::parse(&url).map_err(|e| anyhow::anyhow!("{} is not a valid URL: {}", var, e))?;
    Ok(url)
}
