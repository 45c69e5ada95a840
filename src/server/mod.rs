//! Server application core modules.
//!
//! This module contains all server-side functionality for Rishta: HTTP routing, session-based
//! identity, database access, the subscription entitlement ledger, the manual payment review
//! workflow, profile visibility resolution, media storage and scheduled maintenance.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod storage;
pub mod util;
