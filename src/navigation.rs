//! Site navigation menu.
//!
//! Labels are translation keys and hrefs are default-language paths; both are
//! resolved per language by `localize_navigation`.

use crate::i18n::{
    get_localized_path, use_translations, Language, TranslationMetrics, TranslationTables,
};
use serde::Serialize;

/// A `{label, href}` pair: a dropdown child, or a flattened mobile entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// Translation key or plain text
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavigationItem {
    Link {
        #[serde(rename = "labelKey")]
        label_key: &'static str,
        href: &'static str,
    },
    Dropdown {
        #[serde(rename = "labelKey")]
        label_key: &'static str,
        items: &'static [NavigationEntry],
    },
}

const NAVIGATION_ITEMS: &[NavigationItem] = &[
    NavigationItem::Dropdown {
        label_key: "nav.about",
        items: &[
            NavigationEntry {
                label: "nav.ourStory",
                href: "/#about",
            },
            NavigationEntry {
                label: "nav.ourMission",
                href: "/#mission",
            },
            NavigationEntry {
                label: "nav.team",
                href: "/#team",
            },
        ],
    },
    NavigationItem::Link {
        label_key: "nav.events",
        href: "/#events",
    },
    NavigationItem::Link {
        label_key: "nav.blog",
        href: "/blog",
    },
    NavigationItem::Link {
        label_key: "nav.faq",
        href: "/faq",
    },
    NavigationItem::Link {
        label_key: "nav.contact",
        href: "/contact",
    },
];

/// Main navigation, in display order.
pub fn navigation_items() -> &'static [NavigationItem] {
    NAVIGATION_ITEMS
}

/// Navigation flattened for the mobile menu: dropdown children become
/// top-level entries and the dropdown header itself is dropped.
pub fn mobile_navigation_items() -> Vec<NavigationEntry> {
    navigation_items()
        .iter()
        .flat_map(|item| match item {
            NavigationItem::Link { label_key, href } => vec![NavigationEntry {
                label: *label_key,
                href: *href,
            }],
            NavigationItem::Dropdown { items, .. } => items.to_vec(),
        })
        .collect()
}

/// A navigation entry with its label translated and href localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedEntry {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LocalizedNavigationItem {
    Link { label: String, href: String },
    Dropdown { label: String, items: Vec<LocalizedEntry> },
}

/// The main navigation resolved for `lang`.
pub fn localize_navigation(lang: Language) -> Vec<LocalizedNavigationItem> {
    navigation_items()
        .iter()
        .map(|item| match item {
            NavigationItem::Link { label_key, href } => LocalizedNavigationItem::Link {
                label: use_translations(lang).t(label_key),
                href: get_localized_path(lang, href),
            },
            NavigationItem::Dropdown { label_key, items } => LocalizedNavigationItem::Dropdown {
                label: use_translations(lang).t(label_key),
                items: items
                    .iter()
                    .map(|entry| localize_entry(lang, entry))
                    .collect(),
            },
        })
        .collect()
}

/// The mobile navigation resolved for `lang`.
pub fn localize_mobile_navigation(lang: Language) -> Vec<LocalizedEntry> {
    mobile_navigation_items()
        .iter()
        .map(|entry| localize_entry(lang, entry))
        .collect()
}

/// Every translation key the menus use, dropdown headers included.
pub fn label_keys() -> Vec<&'static str> {
    navigation_items()
        .iter()
        .flat_map(|item| match item {
            NavigationItem::Link { label_key, .. } => vec![*label_key],
            NavigationItem::Dropdown { label_key, items } => std::iter::once(*label_key)
                .chain(items.iter().map(|entry| entry.label))
                .collect(),
        })
        .collect()
}

/// Look up every navigation label in every language.
///
/// Returns the `(language, key)` pairs that do not resolve to a string and
/// counts each lookup in `metrics`.
pub fn check_labels(
    tables: &TranslationTables,
    metrics: &TranslationMetrics,
) -> Vec<(Language, &'static str)> {
    let mut unresolved = Vec::new();

    for lang in Language::all() {
        for key in label_keys() {
            if tables.resolve(lang, key).is_some_and(|value| value.is_string()) {
                metrics.record_resolved();
            } else {
                metrics.record_missing();
                unresolved.push((lang, key));
            }
        }
    }

    unresolved
}

fn localize_entry(lang: Language, entry: &NavigationEntry) -> LocalizedEntry {
    LocalizedEntry {
        label: use_translations(lang).t(entry.label),
        href: get_localized_path(lang, entry.href),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_structure() {
        let items = navigation_items();
        assert_eq!(items.len(), 5);
        assert!(matches!(
            items[0],
            NavigationItem::Dropdown { label_key: "nav.about", items } if items.len() == 3
        ));
        assert_eq!(
            items[2],
            NavigationItem::Link {
                label_key: "nav.blog",
                href: "/blog"
            }
        );
    }

    #[test]
    fn test_mobile_navigation_flattens_dropdowns() {
        let labels: Vec<_> = mobile_navigation_items().iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            vec![
                "nav.ourStory",
                "nav.ourMission",
                "nav.team",
                "nav.events",
                "nav.blog",
                "nav.faq",
                "nav.contact"
            ]
        );
    }

    #[test]
    fn test_navigation_serializes_with_type_tag() {
        let json = serde_json::to_value(navigation_items()).unwrap();
        assert_eq!(json[0]["type"], "dropdown");
        assert_eq!(json[0]["labelKey"], "nav.about");
        assert_eq!(json[0]["items"][1]["href"], "/#mission");
        assert_eq!(json[4]["type"], "link");
        assert_eq!(json[4]["href"], "/contact");
    }

    #[test]
    fn test_localize_navigation_english() {
        let items = localize_navigation(Language::ENGLISH);
        assert_eq!(
            items[3],
            LocalizedNavigationItem::Link {
                label: "FAQ".to_string(),
                href: "/faq".to_string()
            }
        );
    }

    #[test]
    fn test_localize_navigation_german() {
        let items = localize_navigation(Language::GERMAN);
        let LocalizedNavigationItem::Dropdown { label, items: children } = &items[0] else {
            panic!("expected dropdown");
        };
        assert_eq!(label, "Über uns");
        assert_eq!(
            children[0],
            LocalizedEntry {
                label: "Unsere Geschichte".to_string(),
                href: "/de/#about".to_string()
            }
        );
        assert_eq!(
            items[4],
            LocalizedNavigationItem::Link {
                label: "Kontakt".to_string(),
                href: "/de/contact".to_string()
            }
        );
    }

    #[test]
    fn test_every_navigation_label_resolves() {
        for lang in Language::all() {
            for entry in localize_mobile_navigation(lang) {
                assert!(!entry.label.starts_with("nav."), "{} in {}", entry.label, lang);
            }
        }
    }

    #[test]
    fn test_label_keys_include_dropdown_header() {
        let keys = label_keys();
        assert_eq!(keys.len(), 8);
        assert_eq!(keys[0], "nav.about");
        assert_eq!(keys[1], "nav.ourStory");
        assert_eq!(keys[7], "nav.contact");
    }

    #[test]
    fn test_check_labels_embedded_tables() {
        let metrics = TranslationMetrics::new();
        let unresolved = check_labels(TranslationTables::get(), &metrics);

        assert!(unresolved.is_empty(), "{:?}", unresolved);
        assert_eq!(metrics.resolved(), label_keys().len() * Language::all().len());
        assert_eq!(metrics.missing(), 0);
    }

    #[test]
    fn test_check_labels_reports_missing_key() {
        let english = r#"{"nav": {"about": "About", "ourStory": "Our Story", "ourMission": "Our Mission",
            "team": "Team", "events": "Events", "blog": "Blog", "faq": "FAQ", "contact": "Contact"}}"#;
        let german = r#"{"nav": {"about": "Über uns", "ourStory": "Unsere Geschichte",
            "ourMission": "Unsere Mission", "team": "Team", "events": "Events", "blog": "Blog",
            "faq": {"title": "FAQ"}}}"#;
        let tables = TranslationTables::from_sources(&[("en", english), ("de", german)]).unwrap();
        let metrics = TranslationMetrics::new();

        let unresolved = check_labels(&tables, &metrics);
        assert_eq!(
            unresolved,
            vec![(Language::GERMAN, "nav.faq"), (Language::GERMAN, "nav.contact")]
        );
        assert_eq!(metrics.missing(), 2);
        assert_eq!(metrics.resolved(), 14);
    }
}
