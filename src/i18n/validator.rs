//! Translation table audit.
//!
//! Compares every language's table against the default language so that
//! missing or broken copy is caught before it shows up as a raw key on the
//! site.

use crate::i18n::translate::placeholder_regex;
use crate::i18n::{Language, TranslationTables};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Validation report containing errors and warnings about the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a key render as its raw name in some language
    pub errors: Vec<String>,

    /// Suspicious but renderable entries
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation table completeness.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Audit the embedded tables.
    pub fn validate_tables() -> ValidationReport {
        Self::validate(TranslationTables::get())
    }

    /// Audit `tables` against the default language.
    ///
    /// Errors:
    /// - a key with a string in the default language is missing elsewhere
    /// - a key resolves to a non-string leaf
    /// - a whole language table is missing
    ///
    /// Warnings:
    /// - a key exists only in a non-default language
    /// - an empty string value
    /// - `{placeholder}` names differ from the default language
    pub fn validate(tables: &TranslationTables) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default = Language::default_language();

        let reference = Self::string_leaves(tables, default, &mut report);

        for lang in Language::all() {
            if lang == default {
                continue;
            }
            if tables.for_language(lang).is_none() {
                report
                    .errors
                    .push(format!("No translation table for language '{}'", lang));
                continue;
            }

            let strings = Self::string_leaves(tables, lang, &mut report);

            for (key, reference_text) in &reference {
                match strings.get(key) {
                    None => report
                        .errors
                        .push(format!("Missing key '{}' in language '{}'", key, lang)),
                    Some(text) => {
                        let expected = Self::extract_placeholders(reference_text);
                        let actual = Self::extract_placeholders(text);
                        if expected != actual {
                            report.warnings.push(format!(
                                "Placeholder mismatch for '{}' in '{}': {} has {:?}, {} has {:?}",
                                key, lang, default, expected, lang, actual
                            ));
                        }
                    }
                }
            }

            for key in strings.keys().filter(|key| !reference.contains_key(*key)) {
                report.warnings.push(format!(
                    "Key '{}' in language '{}' does not exist in '{}'",
                    key, lang, default
                ));
            }
        }

        report
    }

    /// String leaves of one language; non-string leaves and empty strings are
    /// reported as they are found.
    fn string_leaves<'a>(
        tables: &'a TranslationTables,
        lang: Language,
        report: &mut ValidationReport,
    ) -> BTreeMap<String, &'a str> {
        let mut strings = BTreeMap::new();

        for (key, value) in tables.leaves(lang) {
            match value {
                Value::String(text) => {
                    if text.is_empty() {
                        report
                            .warnings
                            .push(format!("Empty translation for '{}' in '{}'", key, lang));
                    }
                    strings.insert(key, text.as_str());
                }
                other => report.errors.push(format!(
                    "Key '{}' in language '{}' is not a string (found {})",
                    key,
                    lang,
                    json_type(other)
                )),
            }
        }

        strings
    }

    /// Extract the set of `{name}` placeholders from text.
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        placeholder_regex()
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(en: &str, de: &str) -> TranslationTables {
        TranslationTables::from_sources(&[("en", en), ("de", de)]).unwrap()
    }

    // ==================== Embedded Table Tests ====================

    #[test]
    fn test_embedded_tables_are_clean() {
        let report = TranslationValidator::validate_tables();
        assert!(report.is_clean(), "{:?}", report);
    }

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders() {
        let names = TranslationValidator::extract_placeholders("© {year} by {author}");
        assert_eq!(
            names.into_iter().collect::<Vec<_>>(),
            vec!["author".to_string(), "year".to_string()]
        );
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("no {} here").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_matching_tables() {
        let report = TranslationValidator::validate(&tables(
            r#"{"nav": {"blog": "Blog"}}"#,
            r#"{"nav": {"blog": "Blog"}}"#,
        ));
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_missing_key() {
        let report = TranslationValidator::validate(&tables(
            r#"{"nav": {"blog": "Blog", "faq": "FAQ"}}"#,
            r#"{"nav": {"blog": "Blog"}}"#,
        ));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Missing key 'nav.faq'"));
    }

    #[test]
    fn test_validate_extra_key_is_warning() {
        let report = TranslationValidator::validate(&tables(
            r#"{"nav": {"blog": "Blog"}}"#,
            r#"{"nav": {"blog": "Blog", "extra": "Extra"}}"#,
        ));
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("nav.extra"));
    }

    #[test]
    fn test_validate_non_string_leaf() {
        let report = TranslationValidator::validate(&tables(
            r#"{"nav": {"blog": "Blog"}}"#,
            r#"{"nav": {"blog": ["Blog"]}}"#,
        ));
        assert!(report.errors.iter().any(|e| e.contains("not a string (found array)")));
        assert!(report.errors.iter().any(|e| e.contains("Missing key 'nav.blog'")));
    }

    #[test]
    fn test_validate_empty_string_is_warning() {
        let report = TranslationValidator::validate(&tables(
            r#"{"nav": {"blog": "Blog"}}"#,
            r#"{"nav": {"blog": ""}}"#,
        ));
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("Empty translation for 'nav.blog' in 'de'"));
    }

    #[test]
    fn test_validate_placeholder_mismatch() {
        let report = TranslationValidator::validate(&tables(
            r#"{"footer": {"copyright": "© {year}"}}"#,
            r#"{"footer": {"copyright": "© {jahr}"}}"#,
        ));
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_validate_missing_language_table() {
        let tables = TranslationTables::from_sources(&[("en", r#"{"a": "b"}"#)]).unwrap();
        let report = TranslationValidator::validate(&tables);
        assert!(report.errors[0].contains("No translation table for language 'de'"));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
