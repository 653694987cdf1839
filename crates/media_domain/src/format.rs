//! Human-readable formatting for sizes, dates, and blank fields.

use chrono::{DateTime, NaiveDate, Utc};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Formats a byte count with 1024-based units.
///
/// Values under one kilobyte render as a whole number of bytes; larger values
/// carry two decimals.
pub fn readable_size(size: u64) -> String {
    if size < KIB {
        format!("{size} bytes")
    } else if size < MIB {
        format!("{:.2} KB", size as f64 / KIB as f64)
    } else if size < GIB {
        format!("{:.2} MB", size as f64 / MIB as f64)
    } else {
        format!("{:.2} GB", size as f64 / GIB as f64)
    }
}

/// Formats an upload instant for detail views.
pub fn format_upload_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a day bucket for the date filter control.
pub fn format_upload_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

/// Display text for an optional field; blank values render as a dash
/// placeholder instead of an empty cell.
pub fn display_or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "\u{2014}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parse_upload_date;

    #[test]
    fn sizes_below_one_kilobyte_stay_in_bytes() {
        assert_eq!(readable_size(0), "0 bytes");
        assert_eq!(readable_size(1023), "1023 bytes");
    }

    #[test]
    fn larger_sizes_carry_two_decimals() {
        assert_eq!(readable_size(1024), "1.00 KB");
        assert_eq!(readable_size(1536), "1.50 KB");
        assert_eq!(readable_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(readable_size(3 * 1024 * 1024 * 1024 + 512 * 1024 * 1024), "3.50 GB");
    }

    #[test]
    fn upload_date_formats_to_minute_precision() {
        let date = parse_upload_date("2024-05-01T08:30:45Z").expect("date parses");
        assert_eq!(format_upload_date(date), "2024-05-01 08:30");
    }

    #[test]
    fn upload_day_formats_as_iso_date() {
        let day = parse_upload_date("2024-05-01T08:30:45Z")
            .expect("date parses")
            .date_naive();
        assert_eq!(format_upload_day(day), "2024-05-01");
    }

    #[test]
    fn blank_fields_render_as_a_dash() {
        assert_eq!(display_or_dash(Some("800x600")), "800x600");
        assert_eq!(display_or_dash(Some("   ")), "\u{2014}");
        assert_eq!(display_or_dash(None), "\u{2014}");
    }
}
