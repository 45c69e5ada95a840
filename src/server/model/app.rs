use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{service::admin::AdminGate, storage::MediaStore};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub media: MediaStore,
    pub admin: AdminGate,
    /// Lifetime of signed photo and payment proof URLs
    pub photo_url_ttl: Duration,
}
