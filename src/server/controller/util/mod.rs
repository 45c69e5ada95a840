//! Utility functions for controller request handling.
//!
//! Resolves the caller from the session for protected and optionally-authenticated
//! endpoints, and enforces the administrator allow-list.

pub mod get_user;
