// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the gateway client from the parsed configuration
// 3. Activate the file route, which registers the reducer into the store
// 4. Drive the fetch/update task and render the final state
// 5. Exit with proper code (0 = success, 1 = failure state, 2 = error)
//
// The store lives here, on the stack of run() — there is no global
// singleton. Tasks borrow it mutably for the duration of their chain.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - gateway/project configuration
mod file; // src/file/ - the file state machine
mod github; // src/github/ - the Contents API gateway
mod routes; // src/routes.rs - route descriptors and activation
mod store; // src/store.rs - the state container
mod view; // src/view.rs - terminal rendering of FileState

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{ApiConfig, Committer, Project};
use file::{fetch_path, update_file, FileStore, FILE_KEY};
use github::ContentsClient;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = the task completed without a failure state
//   Ok(1) = the task ended in a failure state (rendered to the user)
//   Err = unexpected error (bad arguments, unreadable input file, ...)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            repo_url,
            path,
            json,
            token,
            api_root,
        } => handle_get(&repo_url, &path, token, api_root, json).await,
        Commands::Put {
            repo_url,
            path,
            message,
            content,
            file,
            committer_name,
            committer_email,
            token,
            json,
            api_root,
        } => {
            let committer = Committer {
                name: committer_name,
                email: committer_email,
            };
            let new_content = resolve_content(content, file)?;
            handle_put(
                &repo_url,
                &path,
                &new_content,
                &message,
                committer,
                token,
                api_root,
                json,
            )
            .await
        }
    }
}

// Handles the 'get' subcommand: one fetch chain, then render
async fn handle_get(
    repo_url: &str,
    path: &str,
    token: Option<String>,
    api_root: Option<String>,
    json: bool,
) -> Result<i32> {
    let client = build_client(repo_url, token, api_root, default_committer())?;
    if !json {
        println!(
            "🔍 Fetching {} from {}",
            path,
            client.project().full_name
        );
    }

    let mut store = FileStore::new();
    let render = routes::file_route().activate(&mut store)?;

    fetch_path(&mut store, &client, path).await;

    let state = state_of(&store)?;
    render(state, json)?;
    Ok(exit_code_for(state))
}

// Handles the 'put' subcommand: fetch for the current sha, update, render
#[allow(clippy::too_many_arguments)]
async fn handle_put(
    repo_url: &str,
    path: &str,
    new_content: &str,
    message: &str,
    committer: Committer,
    token: Option<String>,
    api_root: Option<String>,
    json: bool,
) -> Result<i32> {
    let client = build_client(repo_url, token, api_root, committer)?;
    if !json {
        println!(
            "✏️  Updating {} in {}",
            path,
            client.project().full_name
        );
    }

    let mut store = FileStore::new();
    let render = routes::file_route().activate(&mut store)?;

    // The update needs the latest revision marker, so fetch first
    fetch_path(&mut store, &client, path).await;
    let fetched = state_of(&store)?;
    if fetched.file_error.is_some() {
        render(fetched, json)?;
        return Ok(1);
    }

    let sha = fetched.sha.clone();
    update_file(&mut store, &client, new_content, &sha, path, message).await;

    let state = state_of(&store)?;
    render(state, json)?;
    Ok(exit_code_for(state))
}

// Builds the gateway client from a repository reference and CLI values
fn build_client(
    repo_url: &str,
    token: Option<String>,
    api_root: Option<String>,
    committer: Committer,
) -> Result<ContentsClient> {
    let (owner, repo) = github::parse_repo_url(repo_url)?;
    let config = ApiConfig::new(api_root, token);
    let project = Project {
        full_name: format!("{owner}/{repo}"),
        current_user: committer,
    };
    ContentsClient::new(&config, project)
}

// Resolves the new file body for 'put': inline flag, or a local file
fn resolve_content(
    inline: Option<String>,
    file: Option<std::path::PathBuf>,
) -> Result<String> {
    match (inline, file) {
        (Some(content), _) => Ok(content),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| anyhow!("could not read {}: {e}", path.display())),
        (None, None) => bail!("provide the new contents with --content or --file"),
    }
}

// The committer identity used when 'get' builds its client
// (reads never send it, but the project descriptor always carries one)
fn default_committer() -> Committer {
    Committer {
        name: "file-courier".to_string(),
        email: "file-courier@localhost".to_string(),
    }
}

fn state_of(store: &FileStore) -> Result<&file::FileState> {
    store
        .state(FILE_KEY)
        .ok_or_else(|| anyhow!("file state missing from store"))
}

fn exit_code_for(state: &file::FileState) -> i32 {
    if state.file_error.is_some() {
        1 // Exit code 1 = the chain ended in a failure state
    } else {
        0 // Exit code 0 = all good
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_inline_content() {
        let content = resolve_content(Some("hello".to_string()), None).unwrap();
        assert_eq!(content, "hello");
    }

    #[test]
    fn test_resolve_missing_content_errors() {
        assert!(resolve_content(None, None).is_err());
    }

    #[test]
    fn test_exit_code_tracks_failure_state() {
        let ok = file::FileState::initial();
        assert_eq!(exit_code_for(&ok), 0);

        let failed = file::FileState {
            file_error: Some(file::FileError {
                kind: file::ErrorKind::Http,
                message: "Not Found".to_string(),
                status: Some(404),
            }),
            ..file::FileState::initial()
        };
        assert_eq!(exit_code_for(&failed), 1);
    }
}
