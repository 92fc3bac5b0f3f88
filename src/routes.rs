// src/routes.rs
// =============================================================================
// This module is the route layer: pure configuration mapping a route path
// to a deferred (view, reducer) module.
//
// A RouteDescriptor carries a loader — a fallible deferred resolution that
// produces the RouteModule only when the route is activated. Activation
// registers the module's reducer into the store under its fixed key
// (idempotently) and hands back the view. A loader that fails surfaces a
// NavigationError instead of hanging the navigation.
//
// Rust concepts:
// - Function pointers as values: Loaders and views are plain fn items
// - Custom error types: NavigationError implements std::error::Error so
//   it threads through anyhow with `?`
// =============================================================================

use crate::file::{self, FileAction, FileState, FileStore, FILE_KEY};
use crate::store::Reducer;
use crate::view;
use std::fmt;

/// Renders a file state to the terminal (human table or JSON)
pub type View = fn(&FileState, bool) -> anyhow::Result<()>;

/// Deferred, fallible resolution of a route's module
pub type Loader = fn() -> Result<RouteModule, NavigationError>;

// Everything a route contributes once resolved
pub struct RouteModule {
    /// Fixed key the reducer is registered under
    pub key: &'static str,
    pub reducer: Reducer<FileState, FileAction>,
    pub initial: FileState,
    pub view: View,
}

// A route: a path segment plus the loader that resolves its module
pub struct RouteDescriptor {
    pub path: &'static str,
    loader: Loader,
}

impl RouteDescriptor {
    pub fn new(path: &'static str, loader: Loader) -> Self {
        Self { path, loader }
    }

    // Activates the route: resolve the module, register its reducer, and
    // return the view to render with
    //
    // Registration is idempotent, so re-activating an already-active route
    // keeps the slice's current state.
    pub fn activate(&self, store: &mut FileStore) -> Result<View, NavigationError> {
        let module = (self.loader)()?;
        store.register(module.key, module.reducer, module.initial);
        Ok(module.view)
    }
}

// Resolution failure surfaced to the caller instead of a hung navigation
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationError {
    pub path: String,
    pub reason: String,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not activate route '{}': {}", self.path, self.reason)
    }
}

impl std::error::Error for NavigationError {}

/// The file route: path "file", resolving the file reducer and view
pub fn file_route() -> RouteDescriptor {
    RouteDescriptor::new("file", load_file_module)
}

fn load_file_module() -> Result<RouteModule, NavigationError> {
    Ok(RouteModule {
        key: FILE_KEY,
        reducer: file::reduce,
        initial: FileState::initial(),
        view: view::render,
    })
}
