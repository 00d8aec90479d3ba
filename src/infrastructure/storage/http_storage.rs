// src/infrastructure/storage/http_storage.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{ObjectStorage, StoredObject},
};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, header};
use serde_json::Value;

const CACHE_CONTROL: &str = "max-age=3600";

/// Client for the hosted object store's REST API.
#[derive(Clone)]
pub struct HttpObjectStorage {
    client: Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl HttpObjectStorage {
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        service_key: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            service_key: service_key.into(),
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{path}", self.base_url, self.bucket)
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{path}",
            self.base_url, self.bucket
        )
    }
}

#[async_trait]
impl ObjectStorage for HttpObjectStorage {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn put_object(
        &self,
        path: &str,
        content_type: &str,
        data: Bytes,
    ) -> ApplicationResult<StoredObject> {
        let response = self
            .client
            .post(self.object_url(path))
            .bearer_auth(&self.service_key)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CACHE_CONTROL, CACHE_CONTROL)
            .header("x-upsert", "false")
            .body(data)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("storage request: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or_default();
            let message = body["message"].as_str().unwrap_or_default();
            tracing::error!(%status, reason = message, "object upload failed");
            return Err(ApplicationError::infrastructure(format!(
                "storage rejected upload: {status} {message}"
            )));
        }

        Ok(StoredObject {
            path: path.to_owned(),
            public_url: self.public_url(path),
        })
    }
}
