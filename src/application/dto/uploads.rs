use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedImageDto {
    /// Public URL of the stored object.
    pub url: String,
    /// Object path inside the bucket.
    pub path: String,
}
