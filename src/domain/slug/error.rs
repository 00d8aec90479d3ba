use super::kind::EntityKind;
use thiserror::Error;

/// Failures of slug derivation, validation and uniqueness resolution.
///
/// All variants except [`SlugError::UnknownEntityKind`] are recoverable by the
/// caller (ask for another title or a hand-edited slug).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug derived from the supplied text is empty")]
    Empty,
    #[error("invalid slug: {0:?}")]
    Invalid(String),
    #[error("{kind} slug is already in use")]
    Taken { kind: EntityKind },
    #[error("unknown entity kind: {0:?}")]
    UnknownEntityKind(String),
}
