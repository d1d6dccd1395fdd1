//! UPI Lookup API Library
//!
//! This library provides an HTTP gateway that resolves UPI identifiers through
//! a VPA verification provider and enriches the result with bank metadata from
//! a public IFSC lookup service. Access is guarded by a static API key
//! allowlist.
//!
//! # Modules
//!
//! - `app`: Router assembly.
//! - `auth`: API key validation.
//! - `config`: Configuration management.
//! - `enrichment`: VPA resolution + bank enrichment pipeline.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `ifsc_client`: IFSC bank lookup client.
//! - `models`: Request and response models.
//! - `openapi`: OpenAPI document and Swagger UI.
//! - `vpa_client`: VPA verification client.

pub mod app;
pub mod auth;
pub mod config;
pub mod enrichment;
pub mod errors;
pub mod handlers;
pub mod ifsc_client;
pub mod models;
pub mod openapi;
pub mod vpa_client;
