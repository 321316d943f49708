//! Rockset API Client Library
//!
//! Minimal HTTP client for the Rockset REST API, covering the operations the
//! sample application needs: workspaces, collections, document ingestion and
//! SQL queries.

mod client;
pub mod models;

pub use client::Client;
pub use models::{
    AddDocumentsRequest, Collection, CreateCollectionRequest, CreateWorkspaceRequest,
    DocumentStatus, IngestStatus, QueryParameter, QueryRequest, QueryResponse, Workspace,
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("API key is not a valid header value")]
    InvalidApiKey,
}

impl ApiError {
    /// HTTP status of the failed call, if the server produced a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Serialization(_) | ApiError::InvalidApiKey => None,
        }
    }

    /// True when the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::Api {
            status: 404,
            message: "Workspace not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_api_error_other_status_is_not_not_found() {
        let err = ApiError::Api {
            status: 401,
            message: "authorization failed".to_string(),
        };
        assert!(!err.is_not_found());

        let err = ApiError::Api {
            status: 500,
            message: "internal error".to_string(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_serialization_error_has_no_status() {
        let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::from(inner);
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }
}
