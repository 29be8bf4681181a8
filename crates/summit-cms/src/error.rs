//! Error types for content repository access.

use thiserror::Error;

/// Errors that can occur while talking to the content repository.
#[derive(Debug, Error)]
pub enum CmsError {
    /// The API answered with a non-success status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        status: u16,
        url: String,
        message: String,
    },

    /// No published document of the requested singleton type.
    #[error("no document of type {document_type}")]
    NotFound { document_type: String },

    /// A response body could not be decoded.
    #[error("parse error from {url}: {message}")]
    Parse { url: String, message: String },

    /// The repository exposes no master ref, so nothing is published.
    #[error("repository {repository} has no master ref")]
    NoMasterRef { repository: String },

    #[error("invalid repository name: {0:?}")]
    InvalidRepositoryName(String),

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// An error propagated from the core content model.
    #[error("content error: {0}")]
    Content(#[from] summit_core::Error),
}

impl CmsError {
    /// Returns `true` when the error indicates the document was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Convenience alias for content repository results.
pub type CmsResult<T> = std::result::Result<T, CmsError>;
