//! Slug derivation, validation and uniqueness resolution for posts and
//! categories.
pub mod error;
pub mod kind;
pub mod resolver;
pub mod service;
pub mod value;

pub use error::SlugError;
pub use kind::{EntityId, EntityKind};
pub use resolver::{SlugExistence, resolve_unique, suggest_alternative};
pub use service::{SlugAvailability, SlugGenerator, SlugService};
pub use value::{MAX_SLUG_CHARS, Slug, SlugStamp, generate, validate};
