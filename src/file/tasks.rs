// src/file/tasks.rs
// =============================================================================
// This module is the side-effecting half of the file state machine: the
// async tasks that talk to the gateway and narrate what happened to the
// store as a sequence of dispatched actions.
//
// fetch_path:  RequestPath -> (ReceivePath -> DecodePath -> LoadPath
//                              | PathFail)
// update_file: PostFile -> (ReceiveUpdatedFile -> fetch_path again
//                           | PathFail)
//
// Every terminal failure — network, non-OK status, malformed body, bad
// base64 — dispatches PathFail with a structured error, so is_fetching can
// never be left hanging true and the view always has something to render.
//
// The network call and the dispatch sequence are separated: each task
// performs one await and hands the Result to an apply_* function that does
// all the dispatching, so the sequences are testable without a network.
// =============================================================================

use crate::file::{FileAction, FileState};
use crate::github::{decode_content, ContentsClient, ContentsFile, GatewayError, UpdatedFile};
use crate::store::Store;

/// The fixed key the file reducer is registered under
pub const FILE_KEY: &str = "file";

/// The store shape every file task works against
pub type FileStore = Store<FileState, FileAction>;

// Fetches a file and folds the outcome into state
//
// One fetch is in flight at a time by construction: the task holds the
// store mutably for its whole duration, so a second fetch cannot
// interleave its dispatches with this one.
pub async fn fetch_path(store: &mut FileStore, client: &ContentsClient, path: &str) {
    store.dispatch(FILE_KEY, &FileAction::RequestPath);
    let outcome = client.get_contents(path).await;
    apply_fetch_outcome(store, outcome);
}

// Updates a file, then re-fetches it so state reflects the committed
// revision
//
// Parameters:
//   content: the new body as plain text
//   sha: revision being replaced; must come from the most recent fetch or
//        update, or the gateway rejects the request
//   message: commit message recorded by the gateway
pub async fn update_file(
    store: &mut FileStore,
    client: &ContentsClient,
    content: &str,
    sha: &str,
    path: &str,
    message: &str,
) {
    store.dispatch(FILE_KEY, &FileAction::PostFile);
    let outcome = client.put_contents(path, content, sha, message).await;
    if apply_update_outcome(store, outcome) {
        fetch_path(store, client, path).await;
    }
}

// Dispatches the action sequence for a completed fetch
//
// On success: ReceivePath with the revision and path, then the decoded
// body as DecodePath, then LoadPath. A body whose encoding is not base64,
// or that fails to decode, terminates with PathFail instead.
fn apply_fetch_outcome(store: &mut FileStore, outcome: Result<ContentsFile, GatewayError>) {
    let file = match outcome {
        Ok(file) => file,
        Err(err) => {
            store.dispatch(FILE_KEY, &FileAction::PathFail { error: err.into() });
            return;
        }
    };

    store.dispatch(
        FILE_KEY,
        &FileAction::ReceivePath {
            sha: file.sha.clone(),
            path: file.path.clone(),
        },
    );

    let decoded = if file.encoding == "base64" {
        decode_content(&file.content)
    } else {
        Err(GatewayError::Decode(format!(
            "unsupported content encoding '{}'",
            file.encoding
        )))
    };

    match decoded {
        Ok(content) => {
            store.dispatch(FILE_KEY, &FileAction::DecodePath { content });
            store.dispatch(FILE_KEY, &FileAction::LoadPath);
        }
        Err(err) => {
            store.dispatch(FILE_KEY, &FileAction::PathFail { error: err.into() });
        }
    }
}

// Dispatches the action for a completed update
//
// The new sha/path are extracted from the response's content entry.
// Returns true when the update succeeded and the follow-up fetch should
// run.
fn apply_update_outcome(store: &mut FileStore, outcome: Result<UpdatedFile, GatewayError>) -> bool {
    match outcome {
        Ok(updated) => {
            store.dispatch(
                FILE_KEY,
                &FileAction::ReceiveUpdatedFile {
                    sha: updated.content.sha,
                    path: updated.content.path,
                },
            );
            true
        }
        Err(err) => {
            store.dispatch(FILE_KEY, &FileAction::PathFail { error: err.into() });
            false
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why do the tasks take &mut FileStore?
//    - Dispatching rewrites state, which needs mutable access
//    - Holding the borrow across the await also means no other task can
//      touch the store mid-chain — the borrow checker enforces the
//      single-in-flight rule for free
//
// 2. Why split the await from the apply_* functions?
//    - The interesting logic is the dispatch sequence, not the HTTP call
//    - apply_* takes a plain Result, so tests can feed it canned
//      successes and failures without any network or mock server
//
// 3. What does `err.into()` do?
//    - GatewayError converts into the FileError payload carried by
//      PathFail via a From impl (see file/state.rs)
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::{reduce, ErrorKind, FileState};
    use crate::github::encode_content;

    fn store_with_file_slice() -> FileStore {
        let mut store = FileStore::new();
        store.register(FILE_KEY, reduce, FileState::initial());
        store
    }

    fn contents_file(sha: &str, path: &str, body: &str) -> ContentsFile {
        ContentsFile {
            sha: sha.to_string(),
            path: path.to_string(),
            content: encode_content(body),
            encoding: "base64".to_string(),
        }
    }

    #[test]
    fn test_successful_fetch_sequence() {
        let mut store = store_with_file_slice();
        store.dispatch(FILE_KEY, &FileAction::RequestPath);

        apply_fetch_outcome(&mut store, Ok(contents_file("abc123", "README.md", "hello")));

        let state = store.state(FILE_KEY).unwrap();
        assert!(!state.is_fetching);
        assert_eq!(state.content, "hello");
        assert_eq!(state.sha, "abc123");
        assert_eq!(state.path, "README.md");
        assert!(state.file_error.is_none());
    }

    #[test]
    fn test_http_404_dispatches_path_fail() {
        let mut store = store_with_file_slice();
        // A previous fetch loaded some content
        apply_fetch_outcome(&mut store, Ok(contents_file("abc123", "README.md", "hello")));

        store.dispatch(FILE_KEY, &FileAction::RequestPath);
        apply_fetch_outcome(
            &mut store,
            Err(GatewayError::Http {
                status: 404,
                body: "Not Found".to_string(),
            }),
        );

        let state = store.state(FILE_KEY).unwrap();
        assert!(!state.is_fetching);
        let error = state.file_error.as_ref().unwrap();
        assert_eq!(error.kind, ErrorKind::Http);
        assert_eq!(error.status, Some(404));
        // RequestPath cleared the body before the failure landed
        assert_eq!(state.content, "");
        // The revision from the earlier fetch is untouched
        assert_eq!(state.sha, "abc123");
    }

    #[test]
    fn test_network_failure_dispatches_path_fail() {
        let mut store = store_with_file_slice();
        store.dispatch(FILE_KEY, &FileAction::RequestPath);

        apply_fetch_outcome(
            &mut store,
            Err(GatewayError::Network("connection refused".to_string())),
        );

        let state = store.state(FILE_KEY).unwrap();
        assert!(!state.is_fetching);
        assert_eq!(
            state.file_error.as_ref().map(|e| e.kind.clone()),
            Some(ErrorKind::Network)
        );
    }

    #[test]
    fn test_bad_base64_dispatches_path_fail_after_receive() {
        let mut store = store_with_file_slice();
        store.dispatch(FILE_KEY, &FileAction::RequestPath);

        let file = ContentsFile {
            sha: "abc123".to_string(),
            path: "README.md".to_string(),
            content: "this is not base64!!".to_string(),
            encoding: "base64".to_string(),
        };
        apply_fetch_outcome(&mut store, Ok(file));

        let state = store.state(FILE_KEY).unwrap();
        // ReceivePath landed before the decode failed
        assert_eq!(state.sha, "abc123");
        assert!(!state.is_fetching);
        assert_eq!(
            state.file_error.as_ref().map(|e| e.kind.clone()),
            Some(ErrorKind::Decode)
        );
    }

    #[test]
    fn test_unexpected_encoding_dispatches_path_fail() {
        let mut store = store_with_file_slice();
        store.dispatch(FILE_KEY, &FileAction::RequestPath);

        let file = ContentsFile {
            sha: "abc123".to_string(),
            path: "data.bin".to_string(),
            content: "AAAA".to_string(),
            encoding: "none".to_string(),
        };
        apply_fetch_outcome(&mut store, Ok(file));

        let state = store.state(FILE_KEY).unwrap();
        assert!(!state.is_fetching);
        let error = state.file_error.as_ref().unwrap();
        assert_eq!(error.kind, ErrorKind::Decode);
        assert!(error.message.contains("none"));
    }

    #[test]
    fn test_successful_update_extracts_sha_and_path() {
        let mut store = store_with_file_slice();
        store.dispatch(FILE_KEY, &FileAction::PostFile);

        let updated = UpdatedFile {
            content: crate::github::UpdatedEntry {
                sha: "new-sha".to_string(),
                path: "README.md".to_string(),
            },
        };
        let refetch = apply_update_outcome(&mut store, Ok(updated));
        assert!(refetch);

        let state = store.state(FILE_KEY).unwrap();
        assert_eq!(state.sha, "new-sha");
        assert_eq!(state.path, "README.md");
        assert!(!state.is_fetching);
    }

    #[test]
    fn test_failed_update_dispatches_path_fail_and_skips_refetch() {
        let mut store = store_with_file_slice();
        store.dispatch(FILE_KEY, &FileAction::PostFile);

        let refetch = apply_update_outcome(
            &mut store,
            Err(GatewayError::Http {
                status: 409,
                body: "sha does not match".to_string(),
            }),
        );
        assert!(!refetch);

        let state = store.state(FILE_KEY).unwrap();
        assert!(!state.is_fetching);
        let error = state.file_error.as_ref().unwrap();
        assert_eq!(error.status, Some(409));
    }
}
