use crate::domain::errors::DomainError;
use crate::domain::slug::{Slug, SlugStamp};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct SlugStampRow {
    slug: String,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SlugStampRow> for SlugStamp {
    type Error = DomainError;

    fn try_from(row: SlugStampRow) -> Result<Self, Self::Error> {
        Ok(SlugStamp {
            slug: Slug::new(row.slug)?,
            updated_at: row.updated_at,
        })
    }
}
