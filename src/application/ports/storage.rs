// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub path: String,
    pub public_url: String,
}

/// Hosted object store receiving uploaded images.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `data` at `path`; fails if the path already exists.
    async fn put_object(
        &self,
        path: &str,
        content_type: &str,
        data: Bytes,
    ) -> ApplicationResult<StoredObject>;
}
