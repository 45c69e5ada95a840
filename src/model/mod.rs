//! Request and response bodies shared by the HTTP API.

pub mod api;
pub mod entitlement;
pub mod payment;
pub mod profile;
