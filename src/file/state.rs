// src/file/state.rs
// =============================================================================
// This module defines the state that backs the file view.
//
// FileState is the single source of truth for one remote file: its path,
// decoded content, revision marker (sha) and fetch-status flags. It is owned
// by the store and only ever rewritten by the reducer.
//
// The sha is an optimistic-concurrency token: the Contents API rejects an
// update whose sha does not match the latest revision, so it must come from
// the most recent fetch (or the most recent successful update).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: For the "no error right now" case
// - Derive macros: Debug/Clone/PartialEq plus serde for JSON output
// =============================================================================

use crate::github::GatewayError;
use serde::{Deserialize, Serialize};
use std::fmt;

// The state of the single active file view
//
// Initial state starts with is_fetching = true: the view only exists because
// a fetch is about to be issued, so it renders as loading from the start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileState {
    /// True while a fetch or update request is outstanding
    pub is_fetching: bool,
    /// Decoded file body (empty until loaded)
    pub content: String,
    /// Repository-relative file path
    pub path: String,
    /// Opaque revision identifier required to perform an update
    pub sha: String,
    /// Placeholder for a future commit message field (never populated
    /// by the current transitions)
    pub commit_message: String,
    /// Last error payload, set only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_error: Option<FileError>,
}

impl FileState {
    /// The state a freshly registered file view starts from
    pub fn initial() -> Self {
        Self {
            is_fetching: true,
            content: String::new(),
            path: String::new(),
            sha: String::new(),
            commit_message: String::new(),
            file_error: None,
        }
    }
}

// Broad classification of what went wrong, mirroring the three ways a
// request chain can fail: the network, the gateway, or our decoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Request never completed (connect failure, timeout, ...)
    Network,
    /// Gateway answered with a non-OK status
    Http,
    /// Response body could not be parsed or base64-decoded
    Decode,
}

// Structured error carried in FileState so the view can render a
// user-visible failure instead of hanging on is_fetching forever
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status code, when the gateway answered at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.status) {
            (ErrorKind::Http, Some(status)) => {
                write!(f, "HTTP {}: {}", status, self.message)
            }
            (ErrorKind::Http, None) => write!(f, "HTTP error: {}", self.message),
            (ErrorKind::Network, _) => write!(f, "network error: {}", self.message),
            (ErrorKind::Decode, _) => write!(f, "decode error: {}", self.message),
        }
    }
}

// Every terminal failure in a task chain arrives as a GatewayError and is
// dispatched as a PathFail action carrying this payload
impl From<GatewayError> for FileError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Network(message) => FileError {
                kind: ErrorKind::Network,
                message,
                status: None,
            },
            GatewayError::Http { status, body } => FileError {
                kind: ErrorKind::Http,
                message: body,
                status: Some(status),
            },
            GatewayError::Decode(message) => FileError {
                kind: ErrorKind::Decode,
                message,
                status: None,
            },
        }
    }
}
