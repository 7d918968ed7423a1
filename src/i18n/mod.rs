//! Internationalization (i18n) for the bilingual (English/German) site.
//!
//! # Architecture
//!
//! - `registry`: supported languages and their metadata, one default
//! - `language`: validated `Language` type
//! - `tables`: embedded per-language translation dictionaries
//! - `translate`: dotted-key lookup with key fallback
//! - `routing`: language detection from URLs and locale-prefixed paths
//! - `validator`: completeness audit of the tables
//! - `metrics`: lookup hit/miss counters
//!
//! # Example
//!
//! ```rust
//! use coding_club_site::i18n::{get_lang_from_url, get_localized_path, use_translations};
//!
//! let lang = get_lang_from_url("/de/faq");
//! let t = use_translations(lang);
//!
//! assert_eq!(t.t("nav.contact"), "Kontakt");
//! assert_eq!(get_localized_path(lang, "/contact"), "/de/contact");
//! ```

mod language;
mod metrics;
mod registry;
mod routing;
mod tables;
mod translate;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use routing::{get_lang_from_url, get_localized_path, strip_language_prefix, switch_language_path};
pub use tables::TranslationTables;
pub use translate::{interpolate, translate, translate_in, use_translations, Translator};
pub use validator::{TranslationValidator, ValidationReport};
