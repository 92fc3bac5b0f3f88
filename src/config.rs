// src/config.rs
// =============================================================================
// This module holds the externally supplied configuration:
//
// - ApiConfig: where the gateway lives (api_root) and the bearer credential
// - Project: which repository we operate on, and the committer identity
//   recorded on updates
//
// All of this comes from the CLI (with an environment fallback for the
// token); nothing here is persisted.
// =============================================================================

use serde::Serialize;

/// Default root of the Contents API
pub const DEFAULT_API_ROOT: &str = "https://api.github.com/repos";

/// Environment variable consulted when --token is not given
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

// Gateway configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root URL the contents endpoints hang off
    pub api_root: String,
    /// Bearer credential; optional for reads, required by the gateway
    /// for updates
    pub token: Option<String>,
}

impl ApiConfig {
    // Builds the config from CLI values, falling back to the default root
    // and the GITHUB_TOKEN environment variable
    pub fn new(api_root: Option<String>, token: Option<String>) -> Self {
        Self {
            api_root: api_root.unwrap_or_else(|| DEFAULT_API_ROOT.to_string()),
            token: token.or_else(|| std::env::var(TOKEN_ENV_VAR).ok()),
        }
    }
}

// The project descriptor: which repository, and who commits
#[derive(Debug, Clone)]
pub struct Project {
    /// "owner/repo" as it appears in contents URLs
    pub full_name: String,
    /// Identity recorded as the committer on updates
    pub current_user: Committer,
}

// Committer identity, serialized verbatim into update request bodies
#[derive(Debug, Clone, Serialize)]
pub struct Committer {
    pub name: String,
    pub email: String,
}
