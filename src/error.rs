//! # Error Types
//!
//! Two layers of errors live here:
//!
//! - [`StoreError`] is what the cache and live-store collaborators report.
//! - [`WorkflowClientError`] is what callers of the workflow client see. Every variant
//!   wraps the collaborator error that caused it and carries a [`CustomCode`] so callers
//!   can tell a deleted run apart from a broken cache or a failed live query.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Classification codes attached to caller-facing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomCode {
    /// The requested record does not exist (or was deleted)
    NotFound,
    /// Unexpected cache-layer failure
    Generic,
    /// The record exists but its full status could not be assembled
    Internal,
}

impl CustomCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomCode::NotFound => "not_found",
            CustomCode::Generic => "generic",
            CustomCode::Internal => "internal",
        }
    }
}

impl std::fmt::Display for CustomCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors reported by the cache and live-store collaborators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("{resource} \"{name}\" not found in namespace \"{namespace}\"")]
    NotFound {
        resource: String,
        namespace: String,
        name: String,
    },
    #[error("Store backend error: {0}")]
    Backend(String),
    #[error("Invalid label selector: {0}")]
    InvalidSelector(String),
    #[error("Request cancelled")]
    Cancelled,
    #[error("Request deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),
}

impl StoreError {
    pub fn not_found(
        resource: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::NotFound {
            resource: resource.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors returned to callers of the workflow client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowClientError {
    #[error("Error retrieving workflow ({name}) in namespace ({namespace}): {source}")]
    NotFound {
        namespace: String,
        name: String,
        #[source]
        source: StoreError,
    },
    #[error("Error retrieving workflow ({name}) in namespace ({namespace}): {source}")]
    Generic {
        namespace: String,
        name: String,
        #[source]
        source: StoreError,
    },
    #[error("Internal Server Error: {message}: {source}")]
    InternalServer {
        message: String,
        #[source]
        source: StoreError,
    },
}

impl WorkflowClientError {
    /// Classify a lister failure for the given run identity
    pub fn from_lookup(
        namespace: impl Into<String>,
        name: impl Into<String>,
        source: StoreError,
    ) -> Self {
        let namespace = namespace.into();
        let name = name.into();
        if source.is_not_found() {
            Self::NotFound {
                namespace,
                name,
                source,
            }
        } else {
            Self::Generic {
                namespace,
                name,
                source,
            }
        }
    }

    pub fn internal_server(source: StoreError, message: impl Into<String>) -> Self {
        Self::InternalServer {
            message: message.into(),
            source,
        }
    }

    pub fn code(&self) -> CustomCode {
        match self {
            WorkflowClientError::NotFound { .. } => CustomCode::NotFound,
            WorkflowClientError::Generic { .. } => CustomCode::Generic,
            WorkflowClientError::InternalServer { .. } => CustomCode::Internal,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == CustomCode::NotFound
    }

    /// Whether retrying the whole `get` may succeed
    pub fn is_retryable(&self) -> bool {
        !self.is_not_found()
    }

    /// The collaborator error this one wraps
    pub fn store_error(&self) -> &StoreError {
        match self {
            WorkflowClientError::NotFound { source, .. }
            | WorkflowClientError::Generic { source, .. }
            | WorkflowClientError::InternalServer { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkflowClientError>;
