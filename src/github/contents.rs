// src/github/contents.rs
// =============================================================================
// This module talks to the GitHub Contents API for a single file.
//
// Two operations:
// - GET  {api_root}/{owner/repo}/contents/{path} -> sha, path, base64 body
// - PUT  {api_root}/{owner/repo}/contents/{path} -> new sha/path under the
//   response's "content" key (the update needs the prior sha as an
//   optimistic-concurrency token, plus a commit message and committer)
//
// Every failure mode is explicit: a non-OK status becomes
// GatewayError::Http carrying the status and body, a transport failure
// becomes GatewayError::Network, and a malformed body becomes
// GatewayError::Decode. Callers never see a null-ish "it didn't work"
// value — they get a structured error they can fold into state.
//
// Rust concepts:
// - async functions: For network I/O
// - Result with a custom error enum: Every failure is a typed value
// - serde derive: Wire structs map straight onto the JSON bodies
// =============================================================================

use crate::config::{ApiConfig, Project};
use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

// Per-request timeout; the gateway normally answers well inside this
const REQUEST_TIMEOUT_SECS: u64 = 30;

// Everything that can go wrong talking to the gateway
//
// This is the error taxonomy the file state machine consumes: each variant
// maps onto one ErrorKind in the dispatched failure payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request never completed (connect failure, timeout, ...)
    Network(String),
    /// The gateway answered with a non-OK status
    Http { status: u16, body: String },
    /// The response body could not be parsed or decoded
    Decode(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Network(msg) => write!(f, "network error: {msg}"),
            GatewayError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            GatewayError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for GatewayError {}

// Categorizes a reqwest error into our taxonomy
//
// reqwest errors can happen for many reasons: timeouts, DNS failures,
// connection refusals, body-decoding problems. We only need to know which
// side of the network/decode line they fall on.
impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            GatewayError::Decode(error.to_string())
        } else if error.is_timeout() {
            GatewayError::Network("request timed out".to_string())
        } else {
            GatewayError::Network(error.to_string())
        }
    }
}

// The GET response body: the file entry as the gateway describes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsFile {
    /// Revision identifier (optimistic-concurrency token for updates)
    pub sha: String,
    /// Repository-relative path, echoed back by the gateway
    pub path: String,
    /// File body, base64 text (with embedded newlines)
    pub content: String,
    /// Body encoding; the gateway currently always says "base64"
    pub encoding: String,
}

// The PUT response body: the new file entry lives under "content"
// (alongside a "commit" object we don't need)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedFile {
    pub content: UpdatedEntry,
}

/// The slice of the update response we care about
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedEntry {
    pub sha: String,
    pub path: String,
}

// The PUT request body, exactly as the gateway expects it
#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    message: &'a str,
    committer: &'a crate::config::Committer,
    content: String,
    sha: &'a str,
}

// Client for the contents endpoints of one repository
//
// Wraps a reqwest::Client (connection pooling, timeout) together with the
// externally supplied configuration: api_root, optional token, and the
// project descriptor naming the repository and committer identity.
pub struct ContentsClient {
    client: Client,
    api_root: Url,
    token: Option<String>,
    project: Project,
}

impl ContentsClient {
    // Builds a client, validating the api_root up front so a typo fails
    // at startup instead of on the first request
    pub fn new(config: &ApiConfig, project: Project) -> Result<Self> {
        let api_root = Url::parse(&config.api_root)
            .map_err(|e| anyhow!("invalid api root '{}': {e}", config.api_root))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_root,
            token: config.token.clone(),
            project,
        })
    }

    /// The project this client operates on
    pub fn project(&self) -> &Project {
        &self.project
    }

    // Builds {api_root}/{owner/repo}/contents/{path}
    //
    // The path is appended segment by segment so that characters like
    // spaces survive as valid percent-encoded URL segments.
    fn contents_url(&self, path: &str) -> Result<Url, GatewayError> {
        let mut url = self.api_root.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                GatewayError::Network(format!("api root '{}' cannot take a path", self.api_root))
            })?;
            segments.pop_if_empty();
            for part in self.project.full_name.split('/') {
                segments.push(part);
            }
            segments.push("contents");
            for part in path.split('/').filter(|p| !p.is_empty()) {
                segments.push(part);
            }
        }
        Ok(url)
    }

    // Fetches the file entry for a path
    //
    // Returns the parsed entry, or a structured error. A non-OK status is
    // an error here — the caller never proceeds with a half-fetched file.
    pub async fn get_contents(&self, path: &str) -> Result<ContentsFile, GatewayError> {
        let url = self.contents_url(path)?;
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ContentsFile>()
            .await
            .map_err(|e| GatewayError::Decode(format!("malformed contents response: {e}")))
    }

    // Updates the file at a path
    //
    // Parameters:
    //   path: repository-relative file path
    //   content: the new body as plain text (encoded to base64 here)
    //   sha: revision of the file being replaced (stale sha -> HTTP 409)
    //   message: commit message recorded by the gateway
    pub async fn put_contents(
        &self,
        path: &str,
        content: &str,
        sha: &str,
        message: &str,
    ) -> Result<UpdatedFile, GatewayError> {
        let url = self.contents_url(path)?;
        let body = UpdateRequest {
            message,
            committer: &self.project.current_user,
            content: encode_content(content),
            sha,
        };

        let mut request = self
            .client
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body);
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("token {token}"));
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<UpdatedFile>()
            .await
            .map_err(|e| GatewayError::Decode(format!("malformed update response: {e}")))
    }
}

// Parses a repository reference to extract owner and repo name
//
// Supported formats:
//   - https://github.com/owner/repo
//   - https://github.com/owner/repo.git
//   - github.com/owner/repo
//   - owner/repo
//
// Returns: (owner, repo) tuple
pub fn parse_repo_url(url: &str) -> Result<(String, String)> {
    // Remove common prefixes
    let trimmed = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_start_matches("github.com/");

    // Split by '/' to get owner and repo
    let parts: Vec<&str> = trimmed.split('/').filter(|p| !p.is_empty()).collect();

    if parts.len() != 2 {
        return Err(anyhow!("expected owner/repo, got: {url}"));
    }

    // Reject other hosts that slipped through (e.g. gitlab.com/owner/repo)
    if parts[0].contains('.') {
        return Err(anyhow!("not a GitHub repository reference: {url}"));
    }

    let owner = parts[0].to_string();
    let repo = parts[1].trim_end_matches(".git").to_string();

    Ok((owner, repo))
}

// Decodes a base64 file body to text
//
// The gateway wraps base64 payloads at 60 columns with embedded newlines,
// so all whitespace is stripped before strict decoding. The decoded bytes
// must be valid UTF-8 — binary files surface as a decode error rather than
// as mangled text.
pub fn decode_content(encoded: &str) -> Result<String, GatewayError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| GatewayError::Decode(format!("invalid base64 content: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|_| GatewayError::Decode("file content is not valid UTF-8 text".to_string()))
}

// Encodes text to the base64 form the gateway expects in update bodies
pub fn encode_content(content: &str) -> String {
    STANDARD.encode(content.as_bytes())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a custom error enum instead of anyhow here?
//    - The state machine needs to know WHAT failed (network vs HTTP vs
//      decode) to build a structured failure payload
//    - anyhow::Error erases that structure; an enum keeps it
//    - anyhow still wraps these at the application edge via `?`
//
// 2. What is From<reqwest::Error>?
//    - A conversion trait: the ? operator calls it automatically
//    - `request.send().await?` turns any transport error into
//      GatewayError::Network without an explicit map_err
//
// 3. Why path_segments_mut instead of format!?
//    - Pushing segments percent-encodes each one, so a path like
//      "docs/my file.md" becomes a valid URL
//    - format! would produce a URL with a raw space in it
//
// 4. Why strip whitespace before base64 decoding?
//    - The gateway line-wraps base64 bodies, and strict decoders reject
//      embedded newlines
//    - Stripping first keeps the decode strict for everything else
// -----------------------------------------------------------------------------
