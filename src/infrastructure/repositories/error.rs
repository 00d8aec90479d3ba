use crate::domain::{
    errors::DomainError,
    slug::{EntityKind, SlugError},
};

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_POST_CATEGORY: &str = "posts_category_id_fkey";
const CNT_POST_STATUS_CHECK: &str = "posts_status_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // A concurrent writer can claim a slug between the existence check
            // and the insert; the unique index reports it the same way.
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => SlugError::Taken {
                        kind: EntityKind::Post,
                    }
                    .into(),
                    CNT_CATEGORY_SLUG => SlugError::Taken {
                        kind: EntityKind::Category,
                    }
                    .into(),
                    CNT_POST_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_POST_STATUS_CHECK => {
                        DomainError::Validation("unknown post status".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
