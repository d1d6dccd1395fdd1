use crate::auth::{KeyStore, KeyValidator, StaticKeyStore};
use crate::config::Config;
use crate::enrichment::UpiLookupService;
use crate::errors::AppError;
use crate::models::*;
use axum::{
    extract::{RawQuery, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

pub const MISSING_UPI_ID: &str = "Missing required parameter: upi_id";

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// API key gate for the lookup endpoint.
    pub key_validator: KeyValidator,
    /// VPA verification + bank enrichment pipeline.
    pub lookup_service: UpiLookupService,
}

impl AppState {
    /// Builds the state with the allowlist from `config`.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let store = StaticKeyStore::new(config.api_keys.clone());
        Self::with_key_store(config, Arc::new(store))
    }

    /// Builds the state with a custom key backing store.
    pub fn with_key_store(config: &Config, store: Arc<dyn KeyStore>) -> Result<Self, AppError> {
        let lookup_service = UpiLookupService::from_config(config)?;

        Ok(Self {
            key_validator: KeyValidator::new(store),
            lookup_service,
        })
    }
}

/// Health check endpoint.
///
/// Returns the service status, name and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// GET /api/upi
///
/// Resolves a UPI identifier to its registered name, VPA and IFSC code, and
/// attaches bank metadata for the IFSC code when one is known.
///
/// Flow:
/// 1. Validate the API key (`x-api-key` header, else `key` query parameter).
/// 2. Require a non-empty `upi_id`.
/// 3. Verify the VPA upstream; its failures end the request.
/// 4. Look up bank details (best-effort).
#[utoipa::path(
    get,
    path = "/api/upi",
    tag = "upi",
    params(
        UpiLookupQuery,
        ("x-api-key" = Option<String>, Header, description = "API key, takes precedence over the `key` parameter")
    ),
    responses(
        (status = 200, description = "VPA resolved", body = UpiLookupResponse),
        (status = 400, description = "Missing upi_id", body = ErrorResponse),
        (status = 403, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "No VPA data found", body = ErrorResponse),
        (status = 500, description = "VPA verification failed", body = ErrorResponse)
    )
)]
pub async fn upi_lookup(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<UpiLookupResponse>, AppError> {
    let params = UpiLookupQuery::parse(raw_query.as_deref());

    let role = state
        .key_validator
        .check_request(&headers, params.key.as_deref())?;

    let upi_id = params
        .upi_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest(MISSING_UPI_ID.to_string()))?;

    tracing::info!("GET /api/upi - upi_id: {}, role: {}", upi_id, role);

    let response = state.lookup_service.lookup(upi_id).await?;

    tracing::info!(
        "Lookup complete for {} (bank details: {})",
        upi_id,
        response.bank_details_raw.is_some()
    );

    Ok(Json(response))
}
