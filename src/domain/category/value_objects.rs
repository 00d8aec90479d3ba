use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

const MAX_NAME_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
    /// Parse a client-supplied id. `"none"` and blank strings mean "no category".
    pub fn parse_optional(value: &str) -> DomainResult<Option<Self>> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        Uuid::parse_str(value)
            .map(|id| Some(Self(id)))
            .map_err(|_| DomainError::Validation(format!("invalid category id: {value}")))
    }
}

impl From<Uuid> for CategoryId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("category name cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::Validation(format!(
                "category name must be at most {MAX_NAME_CHARS} characters"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescription(String);

impl CategoryDescription {
    /// Blank descriptions are stored as `NULL`.
    pub fn optional(value: Option<String>) -> Option<Self> {
        value
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_and_blank_mean_no_category() {
        assert_eq!(CategoryId::parse_optional("none").unwrap(), None);
        assert_eq!(CategoryId::parse_optional("  ").unwrap(), None);
    }

    #[test]
    fn malformed_category_id_is_rejected() {
        assert!(matches!(
            CategoryId::parse_optional("not-a-uuid"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn name_is_trimmed_and_required() {
        assert_eq!(CategoryName::new("  개발  ").unwrap().as_str(), "개발");
        assert!(CategoryName::new("   ").is_err());
    }

    #[test]
    fn blank_description_is_dropped() {
        assert!(CategoryDescription::optional(Some("  ".into())).is_none());
        assert_eq!(
            CategoryDescription::optional(Some(" notes ".into()))
                .unwrap()
                .as_str(),
            "notes"
        );
    }
}
