//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, organized by table.
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so the same methods run
//! against a pooled connection or inside a transaction.

pub mod entitlement;
pub mod payment;
pub mod profile;
pub mod user;
