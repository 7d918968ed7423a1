//! Schema validation of raw content records.
//!
//! A raw record is the untyped frontmatter of one content file. Validation
//! checks every field before returning, so a failure lists all problems of
//! the record at once.

use crate::content::{
    Article, ContentKind, ContentRecord, Event, EventType, FaqEntry, FieldError,
    FieldErrorReason, ValidationFailure,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use url::Url;

/// Validate `raw` against the schema of `kind`.
///
/// Unknown fields are ignored. `null` counts as absent. The only default
/// applied is `eventType = other`.
pub fn validate(kind: ContentKind, raw: &Value) -> Result<ContentRecord, ValidationFailure> {
    let Some(map) = raw.as_object() else {
        return Err(ValidationFailure {
            kind,
            errors: vec![FieldError::new(
                "<record>",
                FieldErrorReason::WrongType {
                    expected: "object",
                    found: json_type(raw),
                },
            )],
        });
    };

    let mut fields = FieldReader::new(map);
    let record = match kind {
        ContentKind::Article => read_article(&mut fields).map(ContentRecord::Article),
        ContentKind::Event => read_event(&mut fields).map(ContentRecord::Event),
        ContentKind::Faq => read_faq(&mut fields).map(ContentRecord::Faq),
    };

    match record {
        Some(record) if fields.errors.is_empty() => Ok(record),
        _ => Err(ValidationFailure {
            kind,
            errors: fields.errors,
        }),
    }
}

fn read_article(fields: &mut FieldReader<'_>) -> Option<Article> {
    let title = fields.required_string("title");
    let description = fields.required_string("description");
    let author = fields.optional_string("author");
    let date = fields.required_date("date");
    let image = fields.optional_string("image");
    let tags = fields.optional_string_list("tags");

    Some(Article {
        title: title?,
        description: description?,
        author,
        date: date?,
        image,
        tags,
    })
}

fn read_event(fields: &mut FieldReader<'_>) -> Option<Event> {
    let title = fields.required_string("title");
    let description = fields.required_string("description");
    let date = fields.required_date("date");
    let end_date = fields.optional_date("endDate");
    let location = fields.optional_string("location");
    let event_type = fields.event_type("eventType");
    let image = fields.optional_string("image");
    let registration_url = fields.optional_url("registrationUrl");

    if let (Some(start), Some(end)) = (date, end_date) {
        if end < start {
            fields.reject("endDate", FieldErrorReason::EndsBeforeStart { start, end });
        }
    }

    Some(Event {
        title: title?,
        description: description?,
        date: date?,
        end_date,
        location,
        event_type,
        image,
        registration_url,
    })
}

fn read_faq(fields: &mut FieldReader<'_>) -> Option<FaqEntry> {
    let question = fields.required_string("question");
    let order = fields.required_number("order");
    let category = fields.optional_string("category");

    Some(FaqEntry {
        question: question?,
        order: order?,
        category,
    })
}

/// Reads typed fields out of a raw record, collecting every rejection.
struct FieldReader<'a> {
    map: &'a Map<String, Value>,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    fn new(map: &'a Map<String, Value>) -> Self {
        Self {
            map,
            errors: Vec::new(),
        }
    }

    fn reject(&mut self, field: &str, reason: FieldErrorReason) {
        self.errors.push(FieldError::new(field, reason));
    }

    /// Present, non-null value of a field.
    fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|value| !value.is_null())
    }

    fn required(&mut self, field: &str) -> Option<&'a Value> {
        let value = self.get(field);
        if value.is_none() {
            self.reject(field, FieldErrorReason::Missing);
        }
        value
    }

    fn string_value(&mut self, field: &str, value: &'a Value) -> Option<&'a str> {
        match value.as_str() {
            Some(text) => Some(text),
            None => {
                self.reject(field, wrong_type("string", value));
                None
            }
        }
    }

    fn required_string(&mut self, field: &str) -> Option<String> {
        let value = self.required(field)?;
        let text = self.string_value(field, value)?;
        if text.trim().is_empty() {
            self.reject(field, FieldErrorReason::Empty);
            return None;
        }
        Some(text.to_string())
    }

    fn optional_string(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        self.string_value(field, value).map(str::to_string)
    }

    fn optional_string_list(&mut self, field: &str) -> Option<Vec<String>> {
        let value = self.get(field)?;
        let Some(items) = value.as_array() else {
            self.reject(field, wrong_type("array of strings", value));
            return None;
        };

        let mut strings = Vec::with_capacity(items.len());
        let mut valid = true;
        for (index, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(text) => strings.push(text.to_string()),
                None => {
                    self.reject(&format!("{}[{}]", field, index), wrong_type("string", item));
                    valid = false;
                }
            }
        }

        valid.then_some(strings)
    }

    fn date_value(&mut self, field: &str, value: &'a Value) -> Option<NaiveDate> {
        let text = self.string_value(field, value)?;
        let date = parse_date(text);
        if date.is_none() {
            self.reject(field, FieldErrorReason::InvalidDate(text.to_string()));
        }
        date
    }

    fn required_date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = self.required(field)?;
        self.date_value(field, value)
    }

    fn optional_date(&mut self, field: &str) -> Option<NaiveDate> {
        let value = self.get(field)?;
        self.date_value(field, value)
    }

    /// A finite number. `serde_json` turns NaN and infinities into `null`, so
    /// records parsed from JSON report those as missing; the `NotFinite`
    /// check only guards values built some other way.
    fn required_number(&mut self, field: &str) -> Option<f64> {
        let value = self.required(field)?;
        let Some(number) = value.as_f64() else {
            self.reject(field, wrong_type("number", value));
            return None;
        };
        if !number.is_finite() {
            self.reject(field, FieldErrorReason::NotFinite);
            return None;
        }
        Some(number)
    }

    fn optional_url(&mut self, field: &str) -> Option<String> {
        let value = self.get(field)?;
        let text = self.string_value(field, value)?;
        match Url::parse(text) {
            Ok(_) => Some(text.to_string()),
            Err(e) => {
                self.reject(
                    field,
                    FieldErrorReason::InvalidUrl {
                        value: text.to_string(),
                        message: e.to_string(),
                    },
                );
                None
            }
        }
    }

    /// Event type, defaulting to `other` when absent.
    fn event_type(&mut self, field: &str) -> EventType {
        let Some(value) = self.get(field) else {
            return EventType::default();
        };
        let Some(text) = self.string_value(field, value) else {
            return EventType::default();
        };

        EventType::parse(text).unwrap_or_else(|| {
            self.reject(
                field,
                FieldErrorReason::InvalidVariant {
                    value: text.to_string(),
                    allowed: EventType::ALL.iter().map(EventType::as_str).collect(),
                },
            );
            EventType::default()
        })
    }
}

/// Calendar date from `YYYY-MM-DD`, a naive `YYYY-MM-DDTHH:MM:SS` timestamp,
/// or an RFC 3339 timestamp (local date of the given offset).
fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

fn wrong_type(expected: &'static str, found: &Value) -> FieldErrorReason {
    FieldErrorReason::WrongType {
        expected,
        found: json_type(found),
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
