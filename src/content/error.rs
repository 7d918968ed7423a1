//! Validation failures for content records.

use crate::content::ContentKind;
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorReason {
    #[error("required field is missing")]
    Missing,

    #[error("must not be empty")]
    Empty,

    #[error("expected {expected}, found {found}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid date '{0}' (expected YYYY-MM-DD or an RFC 3339 timestamp)")]
    InvalidDate(String),

    #[error("invalid URL '{value}': {message}")]
    InvalidUrl { value: String, message: String },

    #[error("invalid value '{value}' (expected one of: {})", .allowed.join(", "))]
    InvalidVariant {
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("must be a finite number")]
    NotFinite,

    #[error("end date {end} is before start date {start}")]
    EndsBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// A rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    /// Raw (frontmatter) field name, e.g. "endDate"; `tags[1]` for list
    /// elements and `<record>` for the record itself
    pub field: String,
    pub reason: FieldErrorReason,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: FieldErrorReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// Every problem found in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub kind: ContentKind,
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Names of the rejected fields, in the order they were checked.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Reasons recorded for one field.
    pub fn reasons_for(&self, field: &str) -> Vec<&FieldErrorReason> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| &e.reason)
            .collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} record ({} problem{})",
            self.kind,
            self.errors.len(),
            if self.errors.len() == 1 { "" } else { "s" }
        )?;
        for error in &self.errors {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
