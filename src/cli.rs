// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "file-courier",
    version = "0.1.0",
    about = "Fetch and edit single files in GitHub repositories",
    long_about = "file-courier fetches a file from a GitHub repository through the Contents API, \
                  and can push an edited version back as a commit. Updates use the file's \
                  revision sha as an optimistic-concurrency token, so a stale local copy is \
                  rejected instead of silently overwriting newer changes."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (get, put)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a file and print its decoded contents
    ///
    /// Example: file-courier get rust-lang/rust README.md
    Get {
        /// Repository reference (e.g. owner/repo or https://github.com/owner/repo)
        repo_url: String,

        /// Repository-relative file path (e.g. docs/guide.md)
        path: String,

        /// Output the final state in JSON format instead of plain text
        #[arg(long)]
        json: bool,

        /// API token (falls back to the GITHUB_TOKEN environment variable)
        ///
        /// Optional for public repositories on reads
        #[arg(long)]
        token: Option<String>,

        /// Override the API root (e.g. for GitHub Enterprise)
        #[arg(long)]
        api_root: Option<String>,
    },

    /// Update a file: fetch its current revision, then commit new contents
    ///
    /// Example: file-courier put owner/repo notes.md --file notes.md --message "update notes"
    Put {
        /// Repository reference (e.g. owner/repo or https://github.com/owner/repo)
        repo_url: String,

        /// Repository-relative file path of the file to update
        path: String,

        /// Commit message recorded by the gateway
        #[arg(long)]
        message: String,

        /// New file contents, inline
        #[arg(long, conflicts_with = "file")]
        content: Option<String>,

        /// Read the new file contents from a local file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Committer name recorded on the commit
        #[arg(long, default_value = "file-courier")]
        committer_name: String,

        /// Committer email recorded on the commit
        #[arg(long, default_value = "file-courier@localhost")]
        committer_email: String,

        /// API token (falls back to the GITHUB_TOKEN environment variable)
        ///
        /// Required for updates — the gateway rejects unauthenticated writes
        #[arg(long)]
        token: Option<String>,

        /// Output the final state in JSON format instead of plain text
        #[arg(long)]
        json: bool,

        /// Override the API root (e.g. for GitHub Enterprise)
        #[arg(long)]
        api_root: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        let cli = Cli::try_parse_from(["file-courier", "get", "owner/repo", "README.md", "--json"])
            .unwrap();
        match cli.command {
            Commands::Get {
                repo_url,
                path,
                json,
                ..
            } => {
                assert_eq!(repo_url, "owner/repo");
                assert_eq!(path, "README.md");
                assert!(json);
            }
            other => panic!("expected get, parsed {other:?}"),
        }
    }

    #[test]
    fn test_parse_put_requires_message() {
        let result = Cli::try_parse_from(["file-courier", "put", "owner/repo", "README.md"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_put_content_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "file-courier",
            "put",
            "owner/repo",
            "README.md",
            "--message",
            "m",
            "--content",
            "abc",
            "--file",
            "notes.md",
        ]);
        assert!(result.is_err());
    }
}
