//! Language type: validated handle onto a catalog entry.
//!
//! A `Language` can only be built from a code present in the catalog, so any
//! value held in widget state is a valid selector option.

use crate::catalog::{LanguageCatalog, LanguageEntry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// Region-tagged language code (e.g., "en-GB")
    code: &'static str,
}

impl Language {
    /// British English, the default source language.
    pub const ENGLISH_GB: Language = Language { code: "en-GB" };

    /// Hindi, the default target language.
    pub const HINDI: Language = Language { code: "hi-IN" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - Region-tagged code exactly as listed in the catalog
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the catalog
    /// * `Err` if the code is unknown
    ///
    /// # Example
    /// ```ignore
    /// let hindi = Language::from_code("hi-IN")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageCatalog::get().get_by_code(code) {
            Some(entry) => Ok(Language { code: entry.code }),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the region-tagged language code (e.g., "hi-IN").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the catalog entry for this language.
    ///
    /// # Panics
    /// Panics if the code is not in the catalog. This cannot happen for a
    /// Language built through `from_code` or the constants.
    pub fn entry(&self) -> &'static LanguageEntry {
        LanguageCatalog::get()
            .get_by_code(self.code)
            .expect("Language code should always be in the catalog")
    }

    /// Get the display name (e.g., "Hindi").
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Lower-cased primary subtag (e.g., "hi" for "hi-IN").
    ///
    /// Some speech backends only accept bare language names.
    pub fn primary_subtag(&self) -> String {
        self.code
            .split('-')
            .next()
            .unwrap_or(self.code)
            .to_ascii_lowercase()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code)
    }
}
