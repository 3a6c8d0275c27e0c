//! Error type shared by the client and the entities.

use crate::entities::ResourceKind;
use crate::youtube_api::Part;
use http::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The API key is missing or blank, or the HTTP client could not be built.
    #[error("invalid YouTube API configuration: {0}")]
    Configuration(String),

    /// The identifier resolved to no items.
    #[error("{kind} not found: {id}")]
    NotFound { kind: ResourceKind, id: String },

    /// The response omitted a part that was requested.
    #[error("{kind} {id} is missing the {part} part")]
    MissingPart {
        kind: ResourceKind,
        id: String,
        part: Part,
    },

    /// A channel-only operation was given a different kind of entity.
    #[error("expected a {expected}, found a {found}")]
    TypeMismatch {
        expected: ResourceKind,
        found: ResourceKind,
    },

    #[error("send request to YouTube API: {0}")]
    Request(#[from] reqwest::Error),

    #[error("YouTube API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("parse YouTube API response as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} is not a valid count: {value:?}")]
    InvalidCount { field: &'static str, value: String },

    #[error("invalid ISO 8601 duration {value:?}")]
    Duration {
        value: String,
        #[source]
        source: jiff::Error,
    },

    #[error("write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
