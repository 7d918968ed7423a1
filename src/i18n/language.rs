//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for codes present in the registry, so
//! every other i18n function can take it without re-checking.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "de")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const GERMAN: Language = Language { code: "de" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err` for any other code, including the empty string
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => bail!("Unsupported language code: '{}'", code),
        }
    }

    /// Get the default language (served without URL prefix).
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// All supported languages, default first.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Never in practice: a `Language` is only constructed from registry codes.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "German").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Deutsch").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Sitemap / hreflang locale (e.g., "de-AT").
    pub fn sitemap_locale(&self) -> &'static str {
        self.config().sitemap_locale
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::default_language()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
