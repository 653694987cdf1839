//! Route table for the media API endpoints.

use media_domain::MediaItem;

/// API origin used when the host page provides no override.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Absolute endpoint URLs derived from a single configured base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoutes {
    base_url: String,
}

impl Default for ApiRoutes {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiRoutes {
    /// Builds a route table from a base URL, tolerating trailing slashes.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The configured base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET` endpoint listing every media record.
    pub fn files(&self) -> String {
        format!("{}/data/files", self.base_url)
    }

    /// `POST` multipart upload endpoint.
    pub fn upload(&self) -> String {
        format!("{}/data/files/upload", self.base_url)
    }

    /// `POST` delete-by-ids endpoint.
    pub fn delete(&self) -> String {
        format!("{}/data/files/delete", self.base_url)
    }

    /// `POST` metadata update endpoint.
    pub fn update(&self) -> String {
        format!("{}/data/files/update", self.base_url)
    }

    /// `GET` endpoint serving the stored bytes for a path.
    pub fn view(&self, path: &str) -> String {
        format!("{}/data/files/view/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Resolves an item's download URL for previews, links, and opening.
    ///
    /// Absolute URLs pass through untouched; stored paths resolve against the
    /// view endpoint. Items without a download URL resolve to `None`.
    pub fn resolve_download_url(&self, item: &MediaItem) -> Option<String> {
        let path = item.download_url.as_deref()?;
        if path.starts_with("http://") || path.starts_with("https://") {
            return Some(path.to_string());
        }
        Some(self.view(path))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn trailing_slashes_are_stripped_from_the_base() {
        let routes = ApiRoutes::new("https://media.example.com/api//");
        assert_eq!(routes.files(), "https://media.example.com/api/data/files");
    }

    #[test]
    fn endpoints_share_the_configured_base() {
        let routes = ApiRoutes::new("http://localhost:9000/api");

        assert_eq!(routes.upload(), "http://localhost:9000/api/data/files/upload");
        assert_eq!(routes.delete(), "http://localhost:9000/api/data/files/delete");
        assert_eq!(routes.update(), "http://localhost:9000/api/data/files/update");
        assert_eq!(
            routes.view("2024/photo.png"),
            "http://localhost:9000/api/data/files/view/2024/photo.png"
        );
    }

    #[test]
    fn stored_paths_resolve_through_the_view_endpoint() {
        let routes = ApiRoutes::default();
        let item = MediaItem {
            download_url: Some("2024/photo.png".to_string()),
            ..MediaItem::default()
        };

        assert_eq!(
            routes.resolve_download_url(&item),
            Some("http://localhost:8080/api/data/files/view/2024/photo.png".to_string())
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let routes = ApiRoutes::default();
        let item = MediaItem {
            download_url: Some("https://cdn.example.com/photo.png".to_string()),
            ..MediaItem::default()
        };

        assert_eq!(
            routes.resolve_download_url(&item),
            Some("https://cdn.example.com/photo.png".to_string())
        );
    }

    #[test]
    fn items_without_a_path_resolve_to_none() {
        let routes = ApiRoutes::default();
        assert_eq!(routes.resolve_download_url(&MediaItem::default()), None);
    }
}
