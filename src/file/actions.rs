// src/file/actions.rs
// =============================================================================
// This module defines the actions that drive the file state machine.
//
// An action is a tagged record describing something that happened: a request
// went out, a response arrived, a decode finished, something failed. The
// async tasks in tasks.rs construct these and dispatch them to the store;
// the reducer folds them into FileState.
//
// The serde tag mirrors the wire-style action names so that a serialized
// action log reads like REQUEST_PATH / RECEIVE_PATH / ...
// =============================================================================

use crate::file::FileError;
use serde::{Deserialize, Serialize};

// Everything that can happen to the file view, in one enum
//
// The fetch chain dispatches RequestPath -> ReceivePath -> DecodePath ->
// LoadPath; the update chain dispatches PostFile -> ReceiveUpdatedFile and
// then re-runs the fetch chain. Any terminal failure in either chain
// dispatches PathFail instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileAction {
    /// A fetch was initiated
    RequestPath,
    /// The fetch response parsed; carries the revision marker and path
    ReceivePath { sha: String, path: String },
    /// The base64 body decoded to text
    DecodePath { content: String },
    /// The fetch chain completed
    LoadPath,
    /// A fetch or update chain failed terminally
    PathFail { error: FileError },
    /// An update was initiated
    PostFile,
    /// The update response parsed; carries the new revision marker and path
    ReceiveUpdatedFile { sha: String, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_with_type_tag() {
        let action = FileAction::ReceivePath {
            sha: "abc123".to_string(),
            path: "README.md".to_string(),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "RECEIVE_PATH");
        assert_eq!(json["sha"], "abc123");
        assert_eq!(json["path"], "README.md");
    }

    #[test]
    fn test_unit_action_tag() {
        let json = serde_json::to_value(FileAction::LoadPath).unwrap();
        assert_eq!(json["type"], "LOAD_PATH");
    }
}
