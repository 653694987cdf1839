//! MIME category catalog, the pattern match rule, and preview classification.

/// Pattern accepted by every item regardless of MIME type.
pub const WILDCARD_ALL: &str = "*/*";

/// Filterable MIME categories offered by the library chrome.
///
/// The last two entries are sentinel categories whose patterns are not MIME
/// types at all; they intentionally match nothing under [`is_mime_match`]
/// until the server grows attachment-aware filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeCategory {
    /// Every item.
    All,
    /// `image/*`.
    Images,
    /// `audio/*`.
    Audio,
    /// `video/*`.
    Videos,
    /// PDF documents.
    Documents,
    /// Excel spreadsheets.
    Spreadsheets,
    /// Zip archives.
    Archives,
    /// `text/*`.
    Text,
    /// Sentinel for items attached nowhere.
    Unattached,
    /// Sentinel for the current user's own uploads.
    Personal,
}

impl Default for MimeCategory {
    fn default() -> Self {
        Self::All
    }
}

impl MimeCategory {
    /// Full catalog in display order.
    pub const ALL: [MimeCategory; 10] = [
        Self::All,
        Self::Images,
        Self::Audio,
        Self::Videos,
        Self::Documents,
        Self::Spreadsheets,
        Self::Archives,
        Self::Text,
        Self::Unattached,
        Self::Personal,
    ];

    /// Pattern fed to [`is_mime_match`] for this category.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::All => WILDCARD_ALL,
            Self::Images => "image/*",
            Self::Audio => "audio/*",
            Self::Videos => "video/*",
            Self::Documents => "application/pdf",
            Self::Spreadsheets => "application/vnd.ms-excel",
            Self::Archives => "application/zip",
            Self::Text => "text/*",
            Self::Unattached => "none",
            Self::Personal => "personal",
        }
    }

    /// Human label shown in filter controls.
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All files",
            Self::Images => "Images",
            Self::Audio => "Audio",
            Self::Videos => "Videos",
            Self::Documents => "Documents",
            Self::Spreadsheets => "Spreadsheets",
            Self::Archives => "Archives",
            Self::Text => "Text",
            Self::Unattached => "Unattached",
            Self::Personal => "My uploads",
        }
    }

    /// Reverse lookup from a stored pattern, e.g. a select control value.
    pub fn from_pattern(pattern: &str) -> Option<MimeCategory> {
        Self::ALL
            .into_iter()
            .find(|category| category.pattern() == pattern)
    }
}

/// Tests an item's MIME type against a category pattern.
///
/// `*/*` passes everything, including items with no MIME type. Otherwise
/// both sides split on `/`: the type component must match exactly, and the
/// subtype must match exactly unless the pattern's subtype is `*`. Items
/// without a MIME type fail every non-wildcard pattern.
pub fn is_mime_match(mime_type: Option<&str>, pattern: &str) -> bool {
    if pattern == WILDCARD_ALL {
        return true;
    }
    let Some(mime_type) = mime_type else {
        return false;
    };
    let (want_type, want_subtype) = split_mime(pattern);
    let (have_type, have_subtype) = split_mime(mime_type);
    want_type == have_type && (want_subtype == Some("*") || want_subtype == have_subtype)
}

fn split_mime(value: &str) -> (&str, Option<&str>) {
    match value.split_once('/') {
        Some((kind, subtype)) => (kind, Some(subtype)),
        None => (value, None),
    }
}

/// Rendering strategy for a media asset preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Inline `<img>`.
    Image,
    /// Inline `<video>` player.
    Video,
    /// Embedded PDF frame.
    Pdf,
    /// Generic file glyph.
    File,
}

impl PreviewKind {
    /// Classifies a MIME type; unknown and absent types fall back to the
    /// generic file glyph.
    ///
    /// Matroska containers are commonly reported as `application/x-matroska`
    /// or `video/x-matroska`, so the suffix alone marks them as video.
    pub fn from_mime(mime_type: Option<&str>) -> PreviewKind {
        let Some(mime) = mime_type else {
            return PreviewKind::File;
        };
        let (kind, _) = split_mime(mime);
        if kind == "image" {
            return PreviewKind::Image;
        }
        if kind == "video" || mime.ends_with("x-matroska") {
            return PreviewKind::Video;
        }
        if mime == "application/pdf" {
            return PreviewKind::Pdf;
        }
        PreviewKind::File
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wildcard_matches_everything_including_missing_types() {
        assert!(is_mime_match(Some("image/png"), WILDCARD_ALL));
        assert!(is_mime_match(None, WILDCARD_ALL));
    }

    #[test]
    fn wildcard_subtype_matches_the_whole_family() {
        assert!(is_mime_match(Some("image/png"), "image/*"));
        assert!(is_mime_match(Some("image/svg+xml"), "image/*"));
        assert!(!is_mime_match(Some("video/mp4"), "image/*"));
    }

    #[test]
    fn exact_pattern_requires_exact_subtype() {
        assert!(is_mime_match(Some("application/pdf"), "application/pdf"));
        assert!(!is_mime_match(Some("application/zip"), "application/pdf"));
    }

    #[test]
    fn missing_mime_fails_specific_patterns() {
        assert!(!is_mime_match(None, "image/*"));
        assert!(!is_mime_match(None, "application/pdf"));
    }

    #[test]
    fn slashless_pattern_only_matches_slashless_type() {
        assert!(!is_mime_match(Some("image/png"), "image"));
        assert!(is_mime_match(Some("image"), "image"));
        assert!(is_mime_match(Some("image"), "image/*"));
    }

    #[test]
    fn sentinel_categories_match_no_real_mime_type() {
        for mime in ["image/png", "video/mp4", "application/pdf", "none/none"] {
            assert!(!is_mime_match(Some(mime), MimeCategory::Unattached.pattern()));
            assert!(!is_mime_match(Some(mime), MimeCategory::Personal.pattern()));
        }
    }

    #[test]
    fn pattern_round_trips_through_catalog_lookup() {
        for category in MimeCategory::ALL {
            assert_eq!(MimeCategory::from_pattern(category.pattern()), Some(category));
        }
        assert_eq!(MimeCategory::from_pattern("application/json"), None);
    }

    #[test]
    fn preview_kind_classifies_by_type_component() {
        assert_eq!(PreviewKind::from_mime(Some("image/webp")), PreviewKind::Image);
        assert_eq!(PreviewKind::from_mime(Some("video/mp4")), PreviewKind::Video);
        assert_eq!(
            PreviewKind::from_mime(Some("application/x-matroska")),
            PreviewKind::Video
        );
        assert_eq!(PreviewKind::from_mime(Some("application/pdf")), PreviewKind::Pdf);
        assert_eq!(PreviewKind::from_mime(Some("application/zip")), PreviewKind::File);
        assert_eq!(PreviewKind::from_mime(None), PreviewKind::File);
    }
}
