//! Typed HTTP client for the media API.
//!
//! The crate exposes an object-safe [`MediaService`] trait so the runtime can
//! be driven by the real [`HttpMediaService`], the inert [`NoopMediaService`],
//! or a test double. Every call accepts [`RequestOptions`] carrying optional
//! lifecycle hooks; the protocol that runs them lives in [`options`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod http;
pub mod options;
pub mod routes;
pub mod service;

pub use error::ApiError;
pub use http::HttpMediaService;
pub use options::{run_with_hooks, RequestOptions};
pub use routes::{ApiRoutes, DEFAULT_API_BASE_URL};
pub use service::{MediaFuture, MediaService, MediaUpdate, NoopMediaService, UploadRequest};
