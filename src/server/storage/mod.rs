//! Object storage for profile photos and payment proofs.
//!
//! `MediaStore` turns storage keys into time-limited URLs and persists uploaded payment
//! screenshots. Production runs against S3, development and tests against an in-memory store
//! whose "signed" URLs are inline `data:` URLs.

use std::{sync::Arc, time::Duration};

use axum::http::Method;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use object_store::{
    aws::{AmazonS3, AmazonS3Builder},
    memory::InMemory,
    path::Path,
    signer::Signer,
    Attribute, Attributes, ObjectStore, PutOptions, PutPayload,
};

use crate::server::{
    config::MediaBackend,
    error::{storage::StorageError, Error},
    util::token::random_token,
};

const STORED_KEY_SUFFIX_LEN: usize = 24;

#[derive(Clone, Debug)]
pub enum MediaStore {
    AWS(Arc<AmazonS3>),
    Memory(Arc<InMemory>),
}

impl MediaStore {
    /// Builds the store selected by configuration
    ///
    /// # Returns
    /// - `Ok(MediaStore)` - Store ready for use
    /// - `Err(Error::StorageError)` - S3 settings in the environment were incomplete or invalid
    pub fn from_backend(backend: &MediaBackend) -> Result<Self, Error> {
        match backend {
            MediaBackend::S3 { bucket } => {
                let store = AmazonS3Builder::from_env()
                    .with_bucket_name(bucket)
                    .build()
                    .map_err(StorageError::from)?;

                Ok(Self::AWS(Arc::new(store)))
            }
            MediaBackend::Memory => Ok(Self::Memory(Arc::new(InMemory::new()))),
        }
    }

    pub fn as_generic(&self) -> Arc<dyn ObjectStore> {
        match self {
            MediaStore::AWS(store) => store.clone() as Arc<dyn ObjectStore>,
            MediaStore::Memory(store) => store.clone() as Arc<dyn ObjectStore>,
        }
    }

    /// Produces a time-limited GET URL for a stored object
    pub async fn sign(&self, storage_key: &str, ttl: Duration) -> Result<String, StorageError> {
        let path = Path::from(storage_key);

        let url = match self {
            MediaStore::AWS(store) => store.signed_url(Method::GET, &path, ttl).await?.to_string(),
            MediaStore::Memory(store) => {
                let data = store.get(&path).await?.bytes().await?;
                format!(
                    "data:application/octet-stream;base64,{}",
                    STANDARD.encode(data)
                )
            }
        };

        Ok(url)
    }

    /// Signs `storage_key`, degrading to the raw key when signing fails
    pub async fn sign_or_fallback(&self, storage_key: &str, ttl: Duration) -> String {
        match self.sign(storage_key, ttl).await {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(storage_key = %storage_key, "Failed to sign media URL: {}", err);

                storage_key.to_string()
            }
        }
    }

    /// Persists an upload under `prefix` and returns its storage key
    pub async fn store(
        &self,
        prefix: &str,
        bytes: Vec<u8>,
        content_type: Option<&str>,
    ) -> Result<String, StorageError> {
        let storage_key = format!("{}/{}", prefix, random_token(STORED_KEY_SUFFIX_LEN));

        let mut attributes = Attributes::new();
        if let Some(content_type) = content_type {
            attributes.insert(Attribute::ContentType, content_type.to_string().into());
        }

        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        self.as_generic()
            .put_opts(&Path::from(storage_key.as_str()), PutPayload::from(bytes), options)
            .await?;

        Ok(storage_key)
    }

    /// Removes an upload that no record refers to
    ///
    /// Failures are logged with the key so the object can be cleaned up by hand.
    pub async fn discard(&self, storage_key: &str) {
        if let Err(err) = self
            .as_generic()
            .delete(&Path::from(storage_key))
            .await
        {
            tracing::warn!(storage_key = %storage_key, "Failed to discard orphaned upload: {}", err);
        }
    }
}
