// src/application/commands/uploads.rs
use crate::application::{
    dto::{AuthenticatedUser, UploadedImageDto},
    error::{ApplicationError, ApplicationResult},
    ports::{ClockPort, ObjectStoragePort},
};
use bytes::Bytes;
use std::sync::Arc;
use uuid::Uuid;

pub const SUPPORTED_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

const IMAGE_PREFIX: &str = "images";

pub struct UploadImageCommand {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

pub struct ImageUploadService {
    storage: Arc<ObjectStoragePort>,
    clock: Arc<ClockPort>,
    max_bytes: usize,
}

impl ImageUploadService {
    pub fn new(storage: Arc<ObjectStoragePort>, clock: Arc<ClockPort>, max_bytes: usize) -> Self {
        Self {
            storage,
            clock,
            max_bytes,
        }
    }

    pub async fn upload_image(
        &self,
        actor: &AuthenticatedUser,
        command: UploadImageCommand,
    ) -> ApplicationResult<UploadedImageDto> {
        let content_type = normalize_content_type(&command.content_type);
        if !SUPPORTED_IMAGE_TYPES.contains(&content_type.as_str()) {
            return Err(ApplicationError::validation(format!(
                "unsupported image type {content_type:?}; expected one of {}",
                SUPPORTED_IMAGE_TYPES.join(", ")
            )));
        }

        let extension = file_extension(&command.file_name);
        if !SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            return Err(ApplicationError::validation(format!(
                "unsupported file extension {extension:?}; expected one of {}",
                SUPPORTED_IMAGE_EXTENSIONS.join(", ")
            )));
        }

        if command.data.is_empty() {
            return Err(ApplicationError::validation("file is empty"));
        }
        if command.data.len() > self.max_bytes {
            return Err(ApplicationError::validation(format!(
                "file exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        let path = self.object_path(&extension);
        let stored = self
            .storage
            .put_object(&path, &content_type, command.data)
            .await?;

        tracing::info!(path = %stored.path, uploader = %actor.id, "image uploaded");
        Ok(UploadedImageDto {
            url: stored.public_url,
            path: stored.path,
        })
    }

    /// `images/{unix_millis}_{8 hex chars}.{ext}`
    fn object_path(&self, extension: &str) -> String {
        let millis = self.clock.now().timestamp_millis();
        let token = Uuid::new_v4().simple().to_string();
        format!("{IMAGE_PREFIX}/{millis}_{}.{extension}", &token[..8])
    }
}

fn normalize_content_type(raw: &str) -> String {
    raw.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
