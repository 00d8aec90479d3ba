use crate::domain::slug::{EntityKind, SlugAvailability};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedSlugDto {
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugCheckDto {
    pub kind: String,
    pub slug: String,
    pub valid: bool,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl SlugCheckDto {
    pub fn new(kind: EntityKind, availability: SlugAvailability) -> Self {
        Self {
            kind: kind.as_str().to_owned(),
            slug: availability.slug,
            valid: availability.valid,
            available: availability.available,
            suggestion: availability.suggestion.map(|s| s.into_inner()),
        }
    }
}
