//! Ordering and filtering helpers for validated collections.

use crate::content::{Article, Event, FaqEntry};
use chrono::NaiveDate;
use std::cmp::Reverse;

/// Sort FAQ entries by ascending `order`; ties keep their input order.
pub fn sort_faq(entries: &mut [FaqEntry]) {
    entries.sort_by(|a, b| a.order.total_cmp(&b.order));
}

/// Sort articles newest first; same-day articles keep their input order.
pub fn sort_articles(articles: &mut [Article]) {
    articles.sort_by_key(|article| Reverse(article.date));
}

/// Events that have not ended before `today`, soonest first.
pub fn upcoming_events(events: &[Event], today: NaiveDate) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events
        .iter()
        .filter(|event| event.last_day() >= today)
        .collect();
    upcoming.sort_by_key(|event| event.date);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::EventType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn faq(question: &str, order: f64) -> FaqEntry {
        FaqEntry {
            question: question.to_string(),
            order,
            category: None,
        }
    }

    fn article(title: &str, date: NaiveDate) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            author: None,
            date,
            image: None,
            tags: None,
        }
    }

    fn event(title: &str, date: NaiveDate, end_date: Option<NaiveDate>) -> Event {
        Event {
            title: title.to_string(),
            description: String::new(),
            date,
            end_date,
            location: None,
            event_type: EventType::Other,
            image: None,
            registration_url: None,
        }
    }

    #[test]
    fn test_sort_faq_by_order() {
        let mut entries = vec![faq("c", 3.0), faq("a", 1.0), faq("b", 2.5)];
        sort_faq(&mut entries);
        let questions: Vec<_> = entries.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_faq_is_stable() {
        let mut entries = vec![faq("first", 1.0), faq("second", 1.0), faq("zero", 0.0)];
        sort_faq(&mut entries);
        let questions: Vec<_> = entries.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["zero", "first", "second"]);
    }

    #[test]
    fn test_sort_articles_newest_first() {
        let mut articles = vec![
            article("old", date(2023, 1, 1)),
            article("new", date(2024, 6, 1)),
            article("mid", date(2023, 9, 1)),
        ];
        sort_articles(&mut articles);
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_upcoming_events() {
        let today = date(2024, 5, 10);
        let events = vec![
            event("later", date(2024, 6, 1), None),
            event("past", date(2024, 4, 1), None),
            event("running", date(2024, 5, 8), Some(date(2024, 5, 12))),
            event("today", date(2024, 5, 10), None),
        ];

        let titles: Vec<_> = upcoming_events(&events, today)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["running", "today", "later"]);
    }
}
