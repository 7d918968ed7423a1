//! Translation key lookup.
//!
//! Keys are dot-separated paths into the nested tables (`"nav.blog"`). A key
//! that does not resolve to a string renders as itself, so missing copy is
//! visible on the page instead of breaking it.

use crate::i18n::{Language, TranslationTables};
use regex::{Captures, Regex};
use std::sync::OnceLock;
use tracing::warn;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches a `{name}` placeholder, capturing the name.
pub(crate) fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{([a-zA-Z0-9_]+)\}").expect("placeholder pattern is valid")
    })
}

/// Resolve `key` for `lang`.
///
/// Returns the string at the end of the key path, or `key` itself when the
/// path is missing, empty, or ends at a nested object / non-string value.
/// Misses are logged in debug builds only.
///
/// # Example
/// ```
/// use coding_club_site::i18n::{translate, Language};
///
/// assert_eq!(translate(Language::GERMAN, "nav.contact"), "Kontakt");
/// assert_eq!(translate(Language::GERMAN, "nonexistent.key"), "nonexistent.key");
/// ```
pub fn translate(lang: Language, key: &str) -> String {
    translate_in(TranslationTables::get(), lang, key)
}

/// Same as [`translate`], against an explicit set of tables.
pub fn translate_in(tables: &TranslationTables, lang: Language, key: &str) -> String {
    match tables.resolve(lang, key).and_then(|value| value.as_str()) {
        Some(text) => {
            if text.is_empty() && cfg!(debug_assertions) {
                warn!(key, language = %lang, "Empty translation");
            }
            text.to_string()
        }
        None => {
            if cfg!(debug_assertions) {
                warn!("Missing translation: \"{}\" for language: {}", key, lang);
            }
            key.to_string()
        }
    }
}

/// Bind a translator to one language.
pub fn use_translations(lang: Language) -> Translator {
    Translator { lang }
}

/// Translation function bound to a language, for page rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn language(&self) -> Language {
        self.lang
    }

    /// Translate a key in the bound language.
    pub fn t(&self, key: &str) -> String {
        translate(self.lang, key)
    }

    /// Translate a key and substitute `{name}` placeholders.
    ///
    /// Placeholders without a matching parameter are left in place.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), params)
    }
}

/// Replace every `{name}` in `template` with its value from `params`.
///
/// Substitution is a single pass over the template; inserted values are
/// never scanned for placeholders themselves.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
