// src/file/mod.rs
// =============================================================================
// This module is the file state machine.
//
// Submodules:
// - state: FileState and the structured FileError it carries
// - actions: the FileAction enum driving transitions
// - reducer: the pure (state, action) -> state transition function
// - tasks: the async fetch/update orchestration that dispatches actions
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod actions;
mod reducer;
mod state;
mod tasks;

// Re-export public items from submodules
pub use actions::FileAction;
pub use reducer::reduce;
pub use state::{ErrorKind, FileError, FileState};
pub use tasks::{fetch_path, update_file, FileStore, FILE_KEY};
