//! Typed content records for the three collections.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Declared kind of a raw content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Event,
    Faq,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [ContentKind::Article, ContentKind::Event, ContentKind::Faq];

    /// Name of the collection directory holding this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            ContentKind::Article => "blog",
            ContentKind::Event => "events",
            ContentKind::Faq => "faq",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Article => "article",
            ContentKind::Event => "event",
            ContentKind::Faq => "faq",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown content kind: '{0}' (expected article/blog, event/events or faq)")]
pub struct ContentKindError(pub String);

impl FromStr for ContentKind {
    type Err = ContentKindError;

    /// Accepts both kind names and collection names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "article" | "blog" => Ok(ContentKind::Article),
            "event" | "events" => Ok(ContentKind::Event),
            "faq" => Ok(ContentKind::Faq),
            other => Err(ContentKindError(other.to_string())),
        }
    }
}

/// Blog post.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub author: Option<String>,
    pub date: NaiveDate,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Workshop,
    Talk,
    Social,
    Coworking,
    #[default]
    Other,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Workshop,
        EventType::Talk,
        EventType::Social,
        EventType::Coworking,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Workshop => "workshop",
            EventType::Talk => "talk",
            EventType::Social => "social",
            EventType::Coworking => "coworking",
            EventType::Other => "other",
        }
    }

    /// Translation key of the display label (e.g., "events.types.talk").
    pub fn label_key(&self) -> String {
        format!("events.types.{}", self.as_str())
    }

    pub fn parse(s: &str) -> Option<EventType> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Club event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Never earlier than `date`
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub event_type: EventType,
    pub image: Option<String>,
    /// Absolute URL
    pub registration_url: Option<String>,
}

impl Event {
    /// Last day of the event.
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.date)
    }
}

/// FAQ entry; the answer is the record body, rendered elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    /// Display position, ascending
    pub order: f64,
    pub category: Option<String>,
}

/// A record that passed its collection schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContentRecord {
    Article(Article),
    Event(Event),
    Faq(FaqEntry),
}

impl ContentRecord {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRecord::Article(_) => ContentKind::Article,
            ContentRecord::Event(_) => ContentKind::Event,
            ContentRecord::Faq(_) => ContentKind::Faq,
        }
    }
}
