//! HTTP controller endpoints for the Rishta web API.
//!
//! This module contains Axum handlers for entitlements, payment requests and gated profile
//! reads. Controllers resolve the caller from the session, validate inputs, call services,
//! and return JSON responses. Every handler is documented for the OpenAPI spec through
//! utoipa.

pub mod entitlement;
pub mod payment;
pub mod profile;
pub mod util;
