use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

// ============ Request Models ============

/// Query parameters accepted by `GET /api/upi`.
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpiLookupQuery {
    /// UPI identifier to resolve, e.g. `alice@bank`.
    pub upi_id: Option<String>,
    /// API key, used when the `x-api-key` header is absent.
    pub key: Option<String>,
}

impl UpiLookupQuery {
    /// Parses a raw query string, keeping the first value of repeated
    /// parameters and ignoring unknown ones.
    pub fn parse(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        for (name, value) in url::form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match name.as_ref() {
                "upi_id" => &mut query.upi_id,
                "key" => &mut query.key,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        query
    }
}

/// Body sent to the VPA verification provider.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyVpaRequest {
    pub upi_string: String,
}

impl VerifyVpaRequest {
    /// Builds the payment-address string for a UPI identifier.
    ///
    /// The identifier is embedded as-is, without percent-encoding.
    pub fn for_upi_id(upi_id: &str) -> Self {
        Self {
            upi_string: format!("upi://pay?pa={}", upi_id),
        }
    }
}

// ============ Response Models ============

/// Verification record extracted from the provider response.
///
/// All three fields are always serialized, as `null` when the provider
/// omitted them or sent a non-string value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VpaDetails {
    /// Registered account holder name.
    pub name: Option<String>,
    /// Canonical VPA.
    pub vpa: Option<String>,
    /// Bank branch routing code.
    pub ifsc: Option<String>,
}

impl VpaDetails {
    /// Extracts VPA details from the `verify_vpa_resp` record.
    ///
    /// Returns `None` when the record is missing, `null`, an empty object or
    /// not an object at all.
    pub fn from_record(record: Option<&Value>) -> Option<Self> {
        let record = record?.as_object().filter(|obj| !obj.is_empty())?;
        let field = |name: &str| record.get(name).and_then(Value::as_str).map(str::to_string);

        Some(Self {
            name: field("name"),
            vpa: field("vpa"),
            ifsc: field("ifsc"),
        })
    }

    /// The IFSC code, if present and non-empty.
    pub fn ifsc_code(&self) -> Option<&str> {
        self.ifsc.as_deref().filter(|code| !code.is_empty())
    }
}

/// Successful response body of `GET /api/upi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpiLookupResponse {
    pub vpa_details: VpaDetails,
    /// Raw bank lookup body, or `{"warning": "Bank lookup failed"}`.
    ///
    /// Absent when the VPA carried no IFSC code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub bank_details_raw: Option<Value>,
}

/// Error body shared by every non-200 response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
