//! Composed visibility filter over the canonical media list.

use chrono::NaiveDate;

use crate::{is_mime_match, MediaItem, MimeCategory};

/// The three independent filter axes applied to the canonical list.
///
/// Axes compose conjunctively: an item is visible only when every configured
/// axis passes. Filtering never reorders; the canonical order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFilter {
    /// MIME category axis.
    pub category: MimeCategory,
    /// Free-text keyword axis; empty means unset.
    pub keyword: String,
    /// Calendar-day axis; `None` means unset.
    pub upload_day: Option<NaiveDate>,
}

impl Default for MediaFilter {
    fn default() -> Self {
        Self {
            category: MimeCategory::All,
            keyword: String::new(),
            upload_day: None,
        }
    }
}

impl MediaFilter {
    /// True when every configured axis passes for `item`.
    ///
    /// Keyword matching is a case-sensitive substring test against the
    /// display name, with no trimming or normalization.
    pub fn matches(&self, item: &MediaItem) -> bool {
        if !is_mime_match(item.mime_type.as_deref(), self.category.pattern()) {
            return false;
        }
        if !self.keyword.is_empty() && !item.name.contains(&self.keyword) {
            return false;
        }
        if let Some(day) = self.upload_day {
            return item.upload_day() == Some(day);
        }
        true
    }

    /// The visible subset of `items` in canonical order.
    pub fn apply(&self, items: &[MediaItem]) -> Vec<MediaItem> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

/// Distinct calendar days present in `items`, newest first.
///
/// Items without a parseable upload date contribute nothing.
pub fn distinct_upload_days(items: &[MediaItem]) -> Vec<NaiveDate> {
    let mut days: Vec<NaiveDate> = items.iter().filter_map(MediaItem::upload_day).collect();
    days.sort_unstable();
    days.dedup();
    days.reverse();
    days
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_upload_date;

    fn item(name: &str, mime: &str, uploaded: &str) -> MediaItem {
        MediaItem {
            name: name.to_string(),
            mime_type: Some(mime.to_string()),
            upload_date: parse_upload_date(uploaded),
            ..MediaItem::default()
        }
    }

    fn names(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|item| item.name.as_str()).collect()
    }

    fn sample() -> Vec<MediaItem> {
        vec![
            item("beach.png", "image/png", "2024-05-01T08:00:00Z"),
            item("beach-trip.mp4", "video/mp4", "2024-05-01T09:00:00Z"),
            item("notes.txt", "text/plain", "2024-05-02T10:00:00Z"),
            item("Beach-map.pdf", "application/pdf", "2024-05-02T11:00:00Z"),
        ]
    }

    #[test]
    fn default_filter_passes_everything_in_order() {
        let items = sample();
        let visible = MediaFilter::default().apply(&items);

        assert_eq!(
            names(&visible),
            ["beach.png", "beach-trip.mp4", "notes.txt", "Beach-map.pdf"]
        );
    }

    #[test]
    fn axes_compose_conjunctively() {
        let items = sample();
        let filter = MediaFilter {
            category: MimeCategory::Images,
            keyword: "beach".to_string(),
            upload_day: parse_upload_date("2024-05-01").map(|date| date.date_naive()),
        };

        assert_eq!(names(&filter.apply(&items)), ["beach.png"]);
    }

    #[test]
    fn keyword_is_case_sensitive() {
        let items = sample();
        let filter = MediaFilter {
            keyword: "beach".to_string(),
            ..MediaFilter::default()
        };

        // "Beach-map.pdf" starts with a capital letter and is excluded.
        assert_eq!(names(&filter.apply(&items)), ["beach.png", "beach-trip.mp4"]);
    }

    #[test]
    fn upload_day_axis_matches_the_calendar_day() {
        let items = sample();
        let filter = MediaFilter {
            upload_day: parse_upload_date("2024-05-02").map(|date| date.date_naive()),
            ..MediaFilter::default()
        };

        assert_eq!(names(&filter.apply(&items)), ["notes.txt", "Beach-map.pdf"]);
    }

    #[test]
    fn undated_items_fail_the_day_axis() {
        let mut items = sample();
        items.push(MediaItem {
            name: "undated.bin".to_string(),
            ..MediaItem::default()
        });
        let filter = MediaFilter {
            upload_day: parse_upload_date("2024-05-02").map(|date| date.date_naive()),
            ..MediaFilter::default()
        };

        assert_eq!(names(&filter.apply(&items)), ["notes.txt", "Beach-map.pdf"]);
    }

    #[test]
    fn distinct_days_are_deduplicated_newest_first() {
        let days = distinct_upload_days(&sample());
        let expected: Vec<_> = ["2024-05-02", "2024-05-01"]
            .iter()
            .filter_map(|raw| parse_upload_date(raw).map(|date| date.date_naive()))
            .collect();

        assert_eq!(days, expected);
    }
}
