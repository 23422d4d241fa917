//! Error types for loading input bundles, running acceptance checks and
//! probing URLs.
//!
//! Building a schema never fails; these cover everything around it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a [`BuildParams`](crate::BuildParams) bundle.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid input bundle: {source}")]
    InvalidBundle {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            #[cfg(feature = "remote")]
            LoadError::NetworkError { .. } => 3,
            _ => 2,
        }
    }

    pub(crate) fn from_json(source: serde_json::Error) -> Self {
        if source.is_data() {
            LoadError::InvalidBundle { source }
        } else {
            LoadError::InvalidJson { source }
        }
    }
}

/// Errors from the acceptance checks.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid output contract for {kind}: {message}")]
    InvalidContract { kind: String, message: String },

    #[error("{kind} check failed with {} issue(s)", issues.len())]
    Failed { kind: String, issues: Vec<CheckIssue> },
}

impl CheckError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::InvalidContract { .. } => 2,
            CheckError::Failed { .. } => 1,
        }
    }
}

/// One mismatch between a built schema and its contract.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CheckIssue {
    /// JSON Pointer (RFC 6901) to the offending value.
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for CheckIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "/: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Errors from the URL checker.
///
/// Per-URL failures inside [`check_urls`](crate::check_urls) are reported as
/// `broken` results, not errors; these are for the single-request calls and
/// for setting the client up.
#[derive(Debug, Error)]
pub enum UrlCheckError {
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("unsupported method '{method}': expected GET or HEAD")]
    UnsupportedMethod { method: String },

    #[cfg(feature = "remote")]
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UrlCheckError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            UrlCheckError::InvalidUrl { .. } | UrlCheckError::UnsupportedMethod { .. } => 2,
            #[cfg(feature = "remote")]
            UrlCheckError::Client { .. } | UrlCheckError::NetworkError { .. } => 3,
        }
    }
}
