use super::error::SlugError;
use chrono::{DateTime, Utc};
use std::fmt;
use unicode_normalization::{UnicodeNormalization, is_nfc};

/// Maximum slug length, counted in `char`s.
pub const MAX_SLUG_CHARS: usize = 100;

/// URL identifier of a post or category.
///
/// A `Slug` is lowercase, NFC-normalized, made of Unicode letters/digits
/// (any script) and single hyphens, never starts or ends with a hyphen and is
/// 1..=100 chars long. Every constructor upholds this.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Accept an externally supplied slug as-is, or reject it.
    pub fn new(value: impl Into<String>) -> Result<Self, SlugError> {
        let value = value.into();
        if validate(&value) {
            Ok(Self(value))
        } else {
            Err(SlugError::Invalid(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `self` followed by `-{n}`, shortened so the result still fits.
    pub fn with_suffix(&self, n: u32) -> Self {
        let suffix = format!("-{n}");
        let keep = MAX_SLUG_CHARS.saturating_sub(suffix.chars().count());
        let mut base: String = self.0.chars().take(keep).collect();
        while base.ends_with('-') {
            base.pop();
        }
        base.push_str(&suffix);
        Self(base)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Slug plus last modification time, as listed in the sitemap.
#[derive(Debug, Clone)]
pub struct SlugStamp {
    pub slug: Slug,
    pub updated_at: DateTime<Utc>,
}

fn lowercase_stable(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() && lowercase_stable(c)
}

/// Derive a slug from a title or category name.
///
/// Anything that is not a letter or digit (punctuation, symbols, `_`, `-`,
/// whitespace) acts as a word separator; separators collapse to a single
/// hyphen.
pub fn generate(source: &str) -> Result<Slug, SlugError> {
    let lowered: String = source.to_lowercase().nfc().collect();
    let spaced: String = lowered
        .trim()
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .collect();

    let mut slug = spaced.split_whitespace().collect::<Vec<_>>().join("-");

    if slug.chars().count() > MAX_SLUG_CHARS {
        slug = slug.chars().take(MAX_SLUG_CHARS).collect();
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    Ok(Slug(slug))
}

/// Whether `candidate` satisfies the slug invariant.
pub fn validate(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if len == 0 || len > MAX_SLUG_CHARS {
        return false;
    }
    if candidate.starts_with('-') || candidate.ends_with('-') || candidate.contains("--") {
        return false;
    }
    is_nfc(candidate) && candidate.chars().all(|c| c == '-' || is_word_char(c))
}
