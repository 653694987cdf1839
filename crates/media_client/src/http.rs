//! `reqwest`-backed implementation of the media API contract.

use media_domain::{MediaId, MediaRecord};
use reqwest::multipart;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::options::run_with_hooks;
use crate::{ApiError, ApiRoutes, MediaFuture, MediaService, MediaUpdate, RequestOptions, UploadRequest};

/// HTTP implementation of [`MediaService`].
///
/// Cloning is cheap; the underlying `reqwest::Client` shares its connection
/// pool across clones.
#[derive(Debug, Clone, Default)]
pub struct HttpMediaService {
    http: reqwest::Client,
    routes: ApiRoutes,
}

impl HttpMediaService {
    /// Builds a client against the given route table.
    pub fn new(routes: ApiRoutes) -> Self {
        Self {
            http: reqwest::Client::new(),
            routes,
        }
    }

    /// The configured route table.
    pub fn routes(&self) -> &ApiRoutes {
        &self.routes
    }

    async fn fetch_all_inner(&self) -> Result<Vec<MediaRecord>, ApiError> {
        let url = self.routes.files();
        debug!(%url, "fetching media list");
        let response = self.http.get(url).send().await?;
        decode_json(response).await
    }

    async fn upload_inner(&self, request: UploadRequest) -> Result<MediaRecord, ApiError> {
        let mut part = multipart::Part::bytes(request.bytes).file_name(request.file_name);
        if let Some(mime) = request.mime_type.as_deref() {
            part = part.mime_str(mime)?;
        }
        let form = multipart::Form::new()
            .part("file", part)
            .text("uploadedBy", request.uploaded_by)
            .text("name", request.name)
            .text("title", request.title)
            .text("description", request.description)
            .text("altText", request.alt_text);

        let url = self.routes.upload();
        debug!(%url, "uploading media");
        let response = self.http.post(url).multipart(form).send().await?;
        decode_json(response).await
    }

    async fn delete_inner(&self, ids: &[MediaId]) -> Result<(), ApiError> {
        let url = self.routes.delete();
        debug!(%url, count = ids.len(), "deleting media");
        let response = self.http.post(url).json(&ids).send().await?;
        expect_success(response).await?;
        Ok(())
    }

    async fn update_inner(&self, update: &MediaUpdate) -> Result<MediaRecord, ApiError> {
        let url = self.routes.update();
        debug!(%url, id = update.id.0, "updating media metadata");
        let response = self.http.post(url).json(update).send().await?;
        decode_json(response).await
    }
}

impl MediaService for HttpMediaService {
    fn fetch_all<'a>(
        &'a self,
        options: RequestOptions<Vec<MediaRecord>>,
    ) -> MediaFuture<'a, Result<Option<Vec<MediaRecord>>, ApiError>> {
        Box::pin(run_with_hooks(options, self.fetch_all_inner()))
    }

    fn upload<'a>(
        &'a self,
        request: UploadRequest,
        options: RequestOptions<MediaRecord>,
    ) -> MediaFuture<'a, Result<Option<MediaRecord>, ApiError>> {
        Box::pin(run_with_hooks(options, self.upload_inner(request)))
    }

    fn delete_by_ids<'a>(
        &'a self,
        ids: Vec<MediaId>,
        options: RequestOptions<()>,
    ) -> MediaFuture<'a, Result<Option<()>, ApiError>> {
        Box::pin(async move { run_with_hooks(options, self.delete_inner(&ids)).await })
    }

    fn update<'a>(
        &'a self,
        update: MediaUpdate,
        options: RequestOptions<MediaRecord>,
    ) -> MediaFuture<'a, Result<Option<MediaRecord>, ApiError>> {
        Box::pin(async move { run_with_hooks(options, self.update_inner(&update)).await })
    }
}

/// Maps a non-success response into [`ApiError::Status`], preserving the
/// status, headers, and both raw and parsed body forms.
async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let raw_body = response.text().await.unwrap_or_default();
    let body = serde_json::from_str(&raw_body).ok();
    warn!(status = status.as_u16(), "media API returned an error status");

    Err(ApiError::Status {
        status: status.as_u16(),
        body,
        raw_body,
        headers,
    })
}

async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let response = expect_success(response).await?;
    let raw = response.text().await?;
    serde_json::from_str(&raw).map_err(|err| ApiError::Decode(err.to_string()))
}
