use super::error::SlugError;
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Uniqueness scope of a slug. Posts and categories never collide with each
/// other, only with entities of their own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Post,
    Category,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Post, EntityKind::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Post => "post",
            EntityKind::Category => "category",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = SlugError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "post" | "posts" => Ok(EntityKind::Post),
            "category" | "categories" => Ok(EntityKind::Category),
            other => Err(SlugError::UnknownEntityKind(other.to_owned())),
        }
    }
}

/// Identifier of the row excluded from an existence check (the entity being
/// edited).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub Uuid);

impl From<Uuid> for EntityId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<EntityId> for Uuid {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_singular_and_plural_names() {
        assert_eq!("post".parse::<EntityKind>().unwrap(), EntityKind::Post);
        assert_eq!("posts".parse::<EntityKind>().unwrap(), EntityKind::Post);
        assert_eq!(
            "categories".parse::<EntityKind>().unwrap(),
            EntityKind::Category
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "comment".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, SlugError::UnknownEntityKind("comment".into()));
    }

    #[test]
    fn display_matches_as_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
