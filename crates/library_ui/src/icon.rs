//! Centralized icon API with inline glyph geometry.

use leptos::*;

/// Glyphs available to the media library surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    /// Left-pointing chevron.
    ArrowLeft,
    /// Right-pointing chevron.
    ArrowRight,
    /// Confirmation check mark.
    Check,
    /// Dismiss cross.
    Close,
    /// Duplicate/copy glyph.
    Copy,
    /// Open-in-new-context arrow.
    External,
    /// Generic file sheet.
    File,
    /// Tile grid.
    Grid,
    /// Landscape photo.
    Image,
    /// Stacked rows.
    List,
    /// Edit pencil.
    Pencil,
    /// Circular refresh arrow.
    Refresh,
    /// Magnifier.
    Search,
    /// Waste bin.
    Trash,
    /// Upward tray arrow.
    Upload,
    /// Play frame.
    Video,
    /// Alert triangle.
    Warning,
}

impl IconName {
    /// Path data on a 16x16 grid, filled with `currentColor`.
    pub(crate) fn path(self) -> &'static str {
        match self {
            Self::ArrowLeft => "M10.7 13.4 5.3 8l5.4-5.4 1 1L7.4 8l4.3 4.4z",
            Self::ArrowRight => "M5.3 2.6 10.7 8l-5.4 5.4-1-1L8.6 8 4.3 3.6z",
            Self::Check => "M6.4 11.9 2.7 8.2l1.1-1.1 2.6 2.6 5.8-5.8 1.1 1.1z",
            Self::Close => "M4.1 3l3.9 3.9L11.9 3 13 4.1 9.1 8l3.9 3.9-1.1 1.1L8 9.1 4.1 13 3 11.9 6.9 8 3 4.1z",
            Self::Copy => "M5.5 1.5h8v10H12V3H5.5zM2.5 4.5h8v10h-8zm1.5 1.5v7h5V6z",
            Self::External => "M9 2h5v5h-1.5V4.6L7 10.1 5.9 9l5.5-5.5H9zM3 4h4v1.5H4.5v6h6V9H12v4H3z",
            Self::File => "M4 1h5l3 3v11H4zm4.5 1.5V5H11zM5.5 2.5v11h5V6.2H7.3V2.5z",
            Self::Grid => "M2 2h5.2v5.2H2zm6.8 0H14v5.2H8.8zM2 8.8h5.2V14H2zm6.8 0H14V14H8.8z",
            Self::Image => "M2 3h12v10H2zm1.5 1.5v5.4l2.5-2.3 3.1 2.6 2-1.6 1.4 1V4.5zM10 5.6a1.1 1.1 0 1 1 0 2.2 1.1 1.1 0 0 1 0-2.2z",
            Self::List => "M2 3h2v2H2zm4 0h8v2H6zM2 7h2v2H2zm4 0h8v2H6zm-4 4h2v2H2zm4 0h8v2H6z",
            Self::Pencil => "M11.4 1.6 14.4 4.6 5.9 13H3v-2.9zM4.5 10.7v.8h.8l6-6-.8-.8z",
            Self::Refresh => "M8 2.5A5.5 5.5 0 1 0 13.4 9h-1.6A4 4 0 1 1 8 4c1.1 0 2.1.4 2.8 1.2L8.8 7.2H14V2l-2.1 2.1A5.5 5.5 0 0 0 8 2.5z",
            Self::Search => "M7 2a5 5 0 0 1 3.9 8.1l3 3-1.1 1.1-3-3A5 5 0 1 1 7 2zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7z",
            Self::Trash => "M6 1h4v1.5h4V4H2V2.5h4zM3.5 5h9l-.6 10H4.1z",
            Self::Upload => "M8 1l4 4-1.1 1.1-2.1-2.2V11H7.2V3.9L5.1 6.1 4 5zM3 12.5h10V15H3z",
            Self::Video => "M2 4h8v8H2zm9 2.4 3-2v7.2l-3-2z",
            Self::Warning => "M8 1.5 15 14H1zm-.8 4.3h1.6v4H7.2zm0 5h1.6v1.6H7.2z",
        }
    }
}

/// Icon sizing tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Inline and dense chrome.
    Sm,
    /// Default control size.
    Md,
    /// Preview fallbacks and empty states.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    pub(crate) fn px(self) -> &'static str {
        match self {
            Self::Sm => "12",
            Self::Md => "16",
            Self::Lg => "40",
        }
    }
}

#[component]
/// Shared icon primitive rendering inline glyph geometry.
pub fn Icon(
    /// Glyph to render.
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <svg
            class=crate::primitives::merge_layout_class("ui-icon", layout_class)
            viewBox="0 0 16 16"
            width=size.px()
            height=size.px()
            fill="currentColor"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-size=size.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
