//! Locale-aware URL handling.
//!
//! The default language is served unprefixed (`/join`); every other language
//! lives under its code (`/de/join`).

use crate::i18n::Language;
use url::Url;

/// Detect the language of a request from its URL path.
///
/// The first non-empty path segment selects the language when it is a
/// supported code. Anything else falls back to the default language.
/// Query strings and fragments are ignored, and absolute URLs are reduced to
/// their path.
///
/// # Example
/// ```
/// use coding_club_site::i18n::{get_lang_from_url, Language};
///
/// assert_eq!(get_lang_from_url("/de/about"), Language::GERMAN);
/// assert_eq!(get_lang_from_url("/about"), Language::ENGLISH);
/// ```
pub fn get_lang_from_url(path: &str) -> Language {
    pathname(path)
        .split('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| Language::from_code(segment).ok())
        .unwrap_or_default()
}

/// Build the path for `path` in `lang`.
///
/// A missing leading slash is added. Default-language paths are returned as
/// is; other languages get a `/{code}` prefix unless the path already has
/// one. Query and fragment suffixes are kept (`/#about` -> `/de/#about`).
pub fn get_localized_path(lang: Language, path: &str) -> String {
    let clean_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    if lang.is_default() || has_language_prefix(&clean_path, lang) {
        return clean_path;
    }

    format!("/{}{}", lang.code(), clean_path)
}

/// Remove a supported language prefix from a path, if present.
///
/// `/de/join` -> `/join`, `/de` -> `/`, `/join` -> `/join`.
pub fn strip_language_prefix(path: &str) -> String {
    let clean_path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    for lang in Language::all() {
        if lang.is_default() || !has_language_prefix(&clean_path, lang) {
            continue;
        }
        let rest = &clean_path[lang.code().len() + 1..];
        return if rest.starts_with('/') {
            rest.to_string()
        } else {
            format!("/{}", rest)
        };
    }

    clean_path
}

/// Path of the same page in another language, for language switchers and
/// alternate links.
pub fn switch_language_path(path: &str, target: Language) -> String {
    get_localized_path(target, &strip_language_prefix(path))
}

/// Path component of `input`, without query or fragment.
fn pathname(input: &str) -> String {
    if let Ok(url) = Url::parse(input) {
        if url.has_host() {
            return url.path().to_string();
        }
    }

    let end = input.find(['?', '#']).unwrap_or(input.len());
    input[..end].to_string()
}

/// Whether `clean_path` starts with the `/{code}` segment of `lang`.
fn has_language_prefix(clean_path: &str, lang: Language) -> bool {
    match clean_path
        .strip_prefix('/')
        .and_then(|rest| rest.strip_prefix(lang.code()))
    {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}
