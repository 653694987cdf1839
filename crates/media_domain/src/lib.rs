//! Core data model and list logic for the media library.
//!
//! This crate is deliberately free of reactive and network concerns: it owns
//! the canonical [`MediaItem`] shape, the wire [`MediaRecord`] it is decoded
//! from, and the pure functions behind filtering, pagination, and display
//! formatting. Higher layers compose these into reducers and views.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod filter;
pub mod format;
pub mod item;
pub mod mime;
pub mod pagination;

pub use filter::{distinct_upload_days, MediaFilter};
pub use format::{display_or_dash, format_upload_date, format_upload_day, readable_size};
pub use item::{is_blank, parse_upload_date, MediaId, MediaItem, MediaRecord};
pub use mime::{is_mime_match, MimeCategory, PreviewKind, WILDCARD_ALL};
pub use pagination::{clamp_page, page_bounds, page_slice, total_pages};
