//! OpenAPI document and Swagger UI.
//!
//! The document is generated from the `#[utoipa::path]` annotations on the
//! handlers and served at `/api-docs/openapi.json`. `/docs` serves a Swagger UI
//! page that loads it.

use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::auth::API_KEY_HEADER;
use crate::models::{ErrorResponse, HealthResponse, UpiLookupResponse, VpaDetails};

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Registers the `x-api-key` header scheme.
struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "UPI Lookup API",
        description = "Resolves UPI identifiers to the registered name, VPA and IFSC code, with best-effort bank metadata.\n\nAuthentication: `x-api-key` header or `key` query parameter. `/health` is unauthenticated."
    ),
    paths(crate::handlers::health, crate::handlers::upi_lookup),
    components(schemas(VpaDetails, UpiLookupResponse, ErrorResponse, HealthResponse)),
    modifiers(&ApiKeyAddon),
    tags(
        (name = "upi", description = "UPI / VPA lookup"),
        (name = "health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = format!(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>UPI Lookup API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body {{ margin: 0; padding: 0; }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {{
            window.ui = SwaggerUIBundle({{
                url: "{}",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            }});
        }};
    </script>
</body>
</html>
"#,
        OPENAPI_PATH
    );
    (
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}
