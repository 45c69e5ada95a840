//! Test fixture modules for database and object store records.
//!
//! - `user` - identity records the session points at
//! - `profile` - profiles and their stored photos
//! - `entitlement` - entitlement records and unlocked profile sets
//! - `payment` - payment requests and their stored proofs

pub mod entitlement;
pub mod payment;
pub mod profile;
pub mod user;
