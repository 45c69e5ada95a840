//! Session data models and utilities.
//!
//! Authentication is handled by an external issuer that shares the tower-sessions store
//! (Redis/Valkey backed); this module reads the user ID it leaves behind.

pub mod user;
