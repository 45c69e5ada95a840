//! Tests for HTTP controller endpoints.
//!
//! Handlers are invoked directly with the test application state and session, verifying
//! status codes, response bodies and the projection boundary for each endpoint.

mod entitlement;
mod payment;
mod profile;

use rishta_test_utils::prelude::*;

use crate::util::{read_json, respond, TestContextExt};
