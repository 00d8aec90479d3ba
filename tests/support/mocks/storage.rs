// tests/support/mocks/storage.rs
use async_trait::async_trait;
use blog_core::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{ObjectStorage, StoredObject},
};
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const PUBLIC_BASE: &str = "https://storage.test/storage/v1/object/public/blog-images";

/// 受け取ったオブジェクトをメモリに保持するストレージ
#[derive(Clone, Default)]
pub struct MemoryStorage {
    objects: Arc<Mutex<HashMap<String, (String, Bytes)>>>,
}

impl MemoryStorage {
    pub fn object(&self, path: &str) -> Option<(String, Bytes)> {
        self.objects.lock().unwrap().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn put_object(
        &self,
        path: &str,
        content_type: &str,
        data: Bytes,
    ) -> ApplicationResult<StoredObject> {
        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(path) {
            return Err(ApplicationError::infrastructure("object already exists"));
        }
        objects.insert(path.to_owned(), (content_type.to_owned(), data));
        Ok(StoredObject {
            path: path.to_owned(),
            public_url: format!("{PUBLIC_BASE}/{path}"),
        })
    }
}
