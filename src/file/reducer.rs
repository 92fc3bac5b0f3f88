// src/file/reducer.rs
// =============================================================================
// This module is the pure transition function of the file state machine.
//
// reduce() maps (current state, action) to a brand new state. It performs
// no I/O, never panics, and handles every action — all the side effects
// live in tasks.rs, which only talks to the reducer through dispatched
// actions.
//
// Invariant maintained here: is_fetching is true exactly between a
// RequestPath/PostFile and the terminal LoadPath/PathFail that follows it.
//
// Rust concepts:
// - match: The compiler ensures every action variant is handled
// - Struct update syntax: { field: new, ..old.clone() } copies the rest
// =============================================================================

use crate::file::{FileAction, FileState};

// Folds one action into the state, returning the next state
//
// Parameters:
//   state: the current state (borrowed, never mutated)
//   action: the action to apply (borrowed)
//
// Returns: the next FileState
pub fn reduce(state: &FileState, action: &FileAction) -> FileState {
    match action {
        // A fetch is starting: clear the previous body and any stale error
        // so a retry renders as a clean loading view
        FileAction::RequestPath => FileState {
            content: String::new(),
            is_fetching: true,
            file_error: None,
            ..state.clone()
        },
        FileAction::ReceivePath { sha, path } => FileState {
            sha: sha.clone(),
            path: path.clone(),
            ..state.clone()
        },
        FileAction::DecodePath { content } => FileState {
            content: content.clone(),
            ..state.clone()
        },
        FileAction::LoadPath => FileState {
            is_fetching: false,
            ..state.clone()
        },
        FileAction::PathFail { error } => FileState {
            is_fetching: false,
            file_error: Some(error.clone()),
            ..state.clone()
        },
        // An update is starting: the body stays (the user is editing it),
        // but any stale error is cleared
        FileAction::PostFile => FileState {
            is_fetching: true,
            file_error: None,
            ..state.clone()
        },
        // The update chain's terminal: the new revision is in hand, and the
        // follow-up refetch will raise is_fetching again via RequestPath
        FileAction::ReceiveUpdatedFile { sha, path } => FileState {
            sha: sha.clone(),
            path: path.clone(),
            is_fetching: false,
            ..state.clone()
        },
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return a new state instead of mutating?
//    - The reducer is a pure function: same inputs, same output, no surprises
//    - The store swaps the old state for the new one atomically
//    - This makes every transition trivially testable (see below)
//
// 2. What is ..state.clone()?
//    - Struct update syntax: start from a clone of the old state and
//      override only the fields this action touches
//    - The same shape as a JavaScript { ...state, field: value } spread
//
// 3. Why &FileAction and not FileAction?
//    - The reducer only reads the action, it doesn't need to own it
//    - Borrowing lets the store keep ownership of what it dispatches
// -----------------------------------------------------------------------------
