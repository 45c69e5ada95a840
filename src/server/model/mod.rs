//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! the resolved identity of the caller, session data structures and the fixed plan table.

pub mod app;
pub mod identity;
pub mod plan;
pub mod session;
