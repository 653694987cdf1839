//! Object-safe async contract for the media API.

use std::future::Future;
use std::pin::Pin;

use media_domain::{MediaId, MediaRecord};
use serde::{Deserialize, Serialize};

use crate::options::run_with_hooks;
use crate::{ApiError, RequestOptions};

/// Boxed future type used by [`MediaService`] so the trait stays object safe.
///
/// Futures run on the browser event loop and are neither `Send` nor
/// `'static`.
pub type MediaFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Payload for a multipart media upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadRequest {
    /// File name reported to the server.
    pub file_name: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// MIME type as reported by the picker, when known.
    pub mime_type: Option<String>,
    /// Uploader name submitted alongside the file.
    pub uploaded_by: String,
    /// Initial display name.
    pub name: String,
    /// Initial title.
    pub title: String,
    /// Initial description.
    pub description: String,
    /// Initial alternative text.
    pub alt_text: String,
}

/// JSON payload for a metadata update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaUpdate {
    /// Item being updated.
    pub id: MediaId,
    /// New display name.
    pub name: String,
    /// New alternative text.
    pub alt_text: String,
    /// New title.
    pub title: String,
    /// New description.
    pub description: String,
}

/// Media API operations consumed by the library runtime.
///
/// Every call runs under the hook protocol of
/// [`run_with_hooks`](crate::run_with_hooks): `Ok(None)` means the failure
/// was reported through the hooks and deliberately suppressed.
pub trait MediaService {
    /// Lists every media record known to the server.
    fn fetch_all<'a>(
        &'a self,
        options: RequestOptions<Vec<MediaRecord>>,
    ) -> MediaFuture<'a, Result<Option<Vec<MediaRecord>>, ApiError>>;

    /// Uploads one file with its initial metadata.
    fn upload<'a>(
        &'a self,
        request: UploadRequest,
        options: RequestOptions<MediaRecord>,
    ) -> MediaFuture<'a, Result<Option<MediaRecord>, ApiError>>;

    /// Deletes the given ids in a single batch.
    fn delete_by_ids<'a>(
        &'a self,
        ids: Vec<MediaId>,
        options: RequestOptions<()>,
    ) -> MediaFuture<'a, Result<Option<()>, ApiError>>;

    /// Updates one item's editable metadata.
    fn update<'a>(
        &'a self,
        update: MediaUpdate,
        options: RequestOptions<MediaRecord>,
    ) -> MediaFuture<'a, Result<Option<MediaRecord>, ApiError>>;
}

/// Inert service for non-browser targets and baseline tests.
///
/// Calls still run the hook protocol over trivially successful values, so
/// hook wiring can be exercised without a server.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMediaService;

impl MediaService for NoopMediaService {
    fn fetch_all<'a>(
        &'a self,
        options: RequestOptions<Vec<MediaRecord>>,
    ) -> MediaFuture<'a, Result<Option<Vec<MediaRecord>>, ApiError>> {
        Box::pin(run_with_hooks(options, async { Ok(Vec::new()) }))
    }

    fn upload<'a>(
        &'a self,
        _request: UploadRequest,
        options: RequestOptions<MediaRecord>,
    ) -> MediaFuture<'a, Result<Option<MediaRecord>, ApiError>> {
        Box::pin(run_with_hooks(options, async { Ok(MediaRecord::default()) }))
    }

    fn delete_by_ids<'a>(
        &'a self,
        _ids: Vec<MediaId>,
        options: RequestOptions<()>,
    ) -> MediaFuture<'a, Result<Option<()>, ApiError>> {
        Box::pin(run_with_hooks(options, async { Ok(()) }))
    }

    fn update<'a>(
        &'a self,
        _update: MediaUpdate,
        options: RequestOptions<MediaRecord>,
    ) -> MediaFuture<'a, Result<Option<MediaRecord>, ApiError>> {
        Box::pin(run_with_hooks(options, async { Ok(MediaRecord::default()) }))
    }
}
