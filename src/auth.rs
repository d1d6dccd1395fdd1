//! API key validation.
//!
//! Callers authenticate with a static API key sent either in the `x-api-key`
//! header or the `key` query parameter. The header wins when both are present.
//! Keys map to a role label which is only used for logging.

use crate::errors::AppError;
use axum::http::HeaderMap;
use std::collections::HashMap;
use std::sync::Arc;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

pub const MISSING_API_KEY: &str = "Missing API key";
pub const INVALID_API_KEY: &str = "Invalid API key";

/// Backing store for allowlisted API keys.
pub trait KeyStore: Send + Sync {
    /// Returns the role label for `key`, or `None` if the key is not allowed.
    fn role_for(&self, key: &str) -> Option<String>;
}

/// Immutable allowlist loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticKeyStore {
    keys: HashMap<String, String>,
}

impl StaticKeyStore {
    pub fn new(keys: HashMap<String, String>) -> Self {
        Self { keys }
    }
}

impl KeyStore for StaticKeyStore {
    fn role_for(&self, key: &str) -> Option<String> {
        // Compare against every entry so the scan time does not depend on
        // where (or whether) the key matches.
        self.keys
            .iter()
            .fold(None, |found, (candidate, role)| {
                if constant_time_compare(candidate, key) {
                    Some(role)
                } else {
                    found
                }
            })
            .cloned()
    }
}

/// Constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.as_bytes()
        .iter()
        .zip(b.as_bytes().iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Gate in front of the lookup endpoint.
#[derive(Clone)]
pub struct KeyValidator {
    store: Arc<dyn KeyStore>,
}

impl KeyValidator {
    pub fn new(store: Arc<dyn KeyStore>) -> Self {
        Self { store }
    }

    /// Checks a credential and returns the caller's role label.
    ///
    /// Empty values count as absent, so an empty header falls through to
    /// the query parameter.
    pub fn check(
        &self,
        header_key: Option<&str>,
        query_key: Option<&str>,
    ) -> Result<String, AppError> {
        let key = header_key
            .filter(|k| !k.is_empty())
            .or_else(|| query_key.filter(|k| !k.is_empty()))
            .ok_or_else(|| AppError::Forbidden(MISSING_API_KEY.to_string()))?;

        self.store
            .role_for(key)
            .ok_or_else(|| AppError::Forbidden(INVALID_API_KEY.to_string()))
    }

    /// Same as [`KeyValidator::check`], reading the header from a request.
    ///
    /// A header that is present counts as the credential whatever its bytes;
    /// non-UTF-8 values are decoded lossily and fail the allowlist lookup.
    pub fn check_request(
        &self,
        headers: &HeaderMap,
        query_key: Option<&str>,
    ) -> Result<String, AppError> {
        let header_key = headers
            .get(API_KEY_HEADER)
            .map(|v| String::from_utf8_lossy(v.as_bytes()));
        self.check(header_key.as_deref(), query_key)
    }
}
