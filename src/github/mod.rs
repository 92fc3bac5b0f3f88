// src/github/mod.rs
// =============================================================================
// This module handles talking to the GitHub Contents API.
//
// Currently implements:
// - Parsing repository references to extract owner/repo
// - Fetching a single file entry (sha, path, base64 body)
// - Updating a file with a commit message, committer and prior sha
// - base64 encode/decode of file bodies
// =============================================================================

mod contents;

// Re-export the public API from contents.rs
pub use contents::{
    decode_content, encode_content, parse_repo_url, ContentsClient, ContentsFile, GatewayError,
    UpdatedEntry, UpdatedFile,
};
