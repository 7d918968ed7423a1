//! Translation tables: the per-language nested dictionaries.
//!
//! Sources are embedded at compile time and parsed once on first access.

use crate::i18n::Language;
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

const EMBEDDED_SOURCES: &[(&str, &str)] = &[
    ("en", include_str!("locales/en.json")),
    ("de", include_str!("locales/de.json")),
];

/// Nested translation dictionaries keyed by language code.
#[derive(Debug, Clone)]
pub struct TranslationTables {
    tables: HashMap<&'static str, Value>,
}

static TABLES: OnceLock<TranslationTables> = OnceLock::new();

impl TranslationTables {
    /// Get the process-wide tables built from the embedded sources.
    ///
    /// # Panics
    /// Panics if an embedded source is not a JSON object; the unit tests in
    /// this module guard against shipping such a source.
    pub fn get() -> &'static TranslationTables {
        TABLES.get_or_init(|| {
            Self::from_sources(EMBEDDED_SOURCES).expect("embedded translation sources must parse")
        })
    }

    /// Build tables from `(language code, JSON source)` pairs.
    ///
    /// Every code must be a supported language and every source a JSON object.
    pub fn from_sources(sources: &[(&str, &str)]) -> Result<Self> {
        let mut tables = HashMap::with_capacity(sources.len());

        for (code, source) in sources {
            let language = Language::from_code(code)?;
            let value: Value = serde_json::from_str(source)
                .with_context(|| format!("Failed to parse translations for '{}'", code))?;
            if !value.is_object() {
                bail!("Translations for '{}' must be a JSON object", code);
            }
            tables.insert(language.code(), value);
        }

        Ok(Self { tables })
    }

    /// Root dictionary for a language, if one was loaded.
    pub fn for_language(&self, lang: Language) -> Option<&Value> {
        self.tables.get(lang.code())
    }

    /// Walk a dot-separated key path through a language's dictionary.
    ///
    /// Returns the value at the end of the path, which may be a nested object;
    /// callers decide whether a non-string is acceptable.
    pub fn resolve(&self, lang: Language, key: &str) -> Option<&Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = self.for_language(lang)?;
        for segment in key.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// All dotted key paths of a language's dictionary with their leaf values.
    ///
    /// Leaves are every non-object value; empty objects contribute nothing.
    pub fn leaves(&self, lang: Language) -> Vec<(String, &Value)> {
        let mut out = Vec::new();
        if let Some(Value::Object(root)) = self.for_language(lang) {
            collect_leaves(root, String::new(), &mut out);
        }
        out
    }
}

fn collect_leaves<'a>(
    map: &'a Map<String, Value>,
    prefix: String,
    out: &mut Vec<(String, &'a Value)>,
) {
    for (segment, value) in map {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };

        match value {
            Value::Object(nested) => collect_leaves(nested, path, out),
            leaf => out.push((path, leaf)),
        }
    }
}
