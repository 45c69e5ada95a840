//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements business logic, coordinates
//! between repositories and the media store, and runs multi-step operations inside
//! database transactions. Services include the admin allow-list gate, entitlement
//! unlocks and adjustments, the payment request workflow, profile visibility resolution,
//! and retry logic.

pub mod admin;
pub mod entitlement;
pub mod payment;
pub mod profile;
pub mod retry;
