use crate::domain::slug::{self, Slug, SlugError, SlugGenerator};

/// Script-preserving slug generator: lowercases and NFC-normalizes, keeps
/// letters and digits of any script, and joins the words with hyphens.
#[derive(Default, Clone)]
pub struct UnicodeSlugGenerator;

impl SlugGenerator for UnicodeSlugGenerator {
    fn generate(&self, input: &str) -> Result<Slug, SlugError> {
        slug::generate(input)
    }
}
