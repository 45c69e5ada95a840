//! Utility functions and helpers for server operations.
//!
//! Time and date calculations for entitlement validity windows and profile ages, and random
//! token generation for access tokens and storage keys.

pub mod time;
pub mod token;
