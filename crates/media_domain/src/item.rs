//! Canonical media item model and the wire record it is decoded from.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned media identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct MediaId(pub u64);

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One uploaded asset with its metadata, as held client-side.
///
/// Every field other than `name` is optional on the wire; this shape keeps
/// that looseness so partial server records still render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaItem {
    /// Server identifier; absent only for records the server failed to tag.
    pub id: Option<MediaId>,
    /// Display name, also the target of keyword search.
    pub name: String,
    /// Alternative text used when rendering image previews.
    pub alt_text: Option<String>,
    /// Optional human title.
    pub title: Option<String>,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Stored path or absolute URL to the asset bytes.
    pub download_url: Option<String>,
    /// MIME type as reported at upload time.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
    /// Upload instant in UTC.
    pub upload_date: Option<DateTime<Utc>>,
    /// Uploader name submitted with the file.
    pub uploaded_by: Option<String>,
    /// Destination the asset was attached to, if any.
    pub uploaded_to: Option<String>,
    /// Pixel dimensions as reported by the server, e.g. `800x600`.
    pub dimensions: Option<String>,
}

impl MediaItem {
    /// Calendar day of the upload instant, when known.
    pub fn upload_day(&self) -> Option<NaiveDate> {
        self.upload_date.map(|date| date.date_naive())
    }

    /// Field-wise metadata comparison under the blank-insensitive rule.
    ///
    /// `None` and whitespace-only strings count as the same empty value, so
    /// an edit form that materializes absent fields as empty strings does not
    /// register as a change. Dates compare by instant and numeric fields
    /// compare exactly. The `id` never participates.
    pub fn metadata_differs(&self, other: &MediaItem) -> bool {
        !text_eq(Some(&self.name), Some(&other.name))
            || !text_eq(self.alt_text.as_deref(), other.alt_text.as_deref())
            || !text_eq(self.title.as_deref(), other.title.as_deref())
            || !text_eq(self.description.as_deref(), other.description.as_deref())
            || !text_eq(self.download_url.as_deref(), other.download_url.as_deref())
            || !text_eq(self.mime_type.as_deref(), other.mime_type.as_deref())
            || !text_eq(self.uploaded_by.as_deref(), other.uploaded_by.as_deref())
            || !text_eq(self.uploaded_to.as_deref(), other.uploaded_to.as_deref())
            || !text_eq(self.dimensions.as_deref(), other.dimensions.as_deref())
            || self.size != other.size
            || self.upload_date != other.upload_date
    }
}

/// True when a text field carries no usable content.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |text| text.trim().is_empty())
}

fn text_eq(a: Option<&str>, b: Option<&str>) -> bool {
    match (is_blank(a), is_blank(b)) {
        (true, true) => true,
        (false, false) => a == b,
        _ => false,
    }
}

/// Wire representation of a media record as returned by the HTTP API.
///
/// Field names follow the API's camelCase convention; every field defaults so
/// sparse records decode without errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaRecord {
    /// Server identifier.
    pub id: Option<u64>,
    /// Display name.
    pub name: Option<String>,
    /// Alternative text.
    pub alt_text: Option<String>,
    /// Human title.
    pub title: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Stored path or absolute URL.
    pub download_url: Option<String>,
    /// MIME type string.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
    /// Upload timestamp as serialized by the server.
    pub upload_date: Option<String>,
    /// Uploader name.
    pub uploaded_by: Option<String>,
    /// Attachment destination.
    pub uploaded_to: Option<String>,
    /// Pixel dimensions.
    pub dimensions: Option<String>,
}

impl MediaRecord {
    /// Converts the wire record into the canonical client-side shape.
    ///
    /// A missing name becomes the empty string; an unparseable upload
    /// timestamp becomes `None` rather than failing the whole record.
    pub fn into_item(self) -> MediaItem {
        MediaItem {
            id: self.id.map(MediaId),
            name: self.name.unwrap_or_default(),
            alt_text: self.alt_text,
            title: self.title,
            description: self.description,
            download_url: self.download_url,
            mime_type: self.mime_type,
            size: self.size,
            upload_date: self.upload_date.as_deref().and_then(parse_upload_date),
            uploaded_by: self.uploaded_by,
            uploaded_to: self.uploaded_to,
            dimensions: self.dimensions,
        }
    }
}

/// Parses a server upload timestamp into a UTC instant.
///
/// RFC 3339 strings are honored with their offset; naive timestamps and bare
/// dates are assumed to be UTC, matching how the API serializes them.
pub fn parse_upload_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn base_item() -> MediaItem {
        MediaItem {
            id: Some(MediaId(7)),
            name: "holiday.png".to_string(),
            alt_text: Some("Beach at dusk".to_string()),
            title: None,
            description: None,
            download_url: Some("2024/holiday.png".to_string()),
            mime_type: Some("image/png".to_string()),
            size: Some(52_000),
            upload_date: parse_upload_date("2024-05-01T08:30:00Z"),
            uploaded_by: Some("avery".to_string()),
            uploaded_to: None,
            dimensions: Some("800x600".to_string()),
        }
    }

    #[test]
    fn record_decodes_camel_case_fields() {
        let record: MediaRecord = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "clip.mp4",
                "altText": "short clip",
                "downloadUrl": "clips/clip.mp4",
                "mimeType": "video/mp4",
                "size": 1048576,
                "uploadDate": "2024-05-01T08:30:00",
                "uploadedBy": "avery"
            }"#,
        )
        .expect("record decodes");

        assert_eq!(record.id, Some(3));
        assert_eq!(record.alt_text.as_deref(), Some("short clip"));
        assert_eq!(record.download_url.as_deref(), Some("clips/clip.mp4"));
        assert_eq!(record.uploaded_by.as_deref(), Some("avery"));
    }

    #[test]
    fn sparse_record_decodes_with_defaults() {
        let record: MediaRecord = serde_json::from_str(r#"{"id": 9}"#).expect("record decodes");
        let item = record.into_item();

        assert_eq!(item.id, Some(MediaId(9)));
        assert_eq!(item.name, "");
        assert_eq!(item.upload_date, None);
    }

    #[test]
    fn upload_date_accepts_rfc3339_naive_and_bare_forms() {
        let with_offset = parse_upload_date("2024-05-01T10:30:00+02:00").expect("offset parses");
        let naive = parse_upload_date("2024-05-01T08:30:00.000").expect("naive parses");
        let bare = parse_upload_date("2024-05-01").expect("bare date parses");

        assert_eq!(with_offset, naive);
        assert_eq!(bare, parse_upload_date("2024-05-01T00:00:00Z").expect("midnight"));
        assert_eq!(parse_upload_date("yesterday-ish"), None);
    }

    #[test]
    fn metadata_diff_treats_blank_variants_as_equal() {
        let original = base_item();
        let mut edited = original.clone();
        edited.title = Some(String::new());
        edited.description = Some("   ".to_string());
        edited.uploaded_to = Some(String::new());

        assert!(!original.metadata_differs(&edited));
    }

    #[test]
    fn metadata_diff_detects_real_text_change() {
        let original = base_item();
        let mut edited = original.clone();
        edited.alt_text = Some("Beach at dawn".to_string());

        assert!(original.metadata_differs(&edited));
    }

    #[test]
    fn metadata_diff_compares_dates_by_instant() {
        let original = base_item();
        let mut edited = original.clone();
        edited.upload_date = parse_upload_date("2024-05-01T10:30:00+02:00");

        assert!(!original.metadata_differs(&edited));

        edited.upload_date = parse_upload_date("2024-05-01T10:30:00Z");
        assert!(original.metadata_differs(&edited));
    }
}
