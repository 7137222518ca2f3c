//! Location capture and resolution against workspace roots.
//!
//! # Responsibility
//! - Decide, at capture time, whether a file path is stored absolute or
//!   relative to its innermost containing root.
//! - Resolve stored locations to concrete paths, or report them
//!   unresolvable when their root is no longer open.
//!
//! # Invariants
//! - Capture followed by resolve against unchanged roots recovers the
//!   original path.
//! - Resolution requires an exact root-path match; a missing root is a
//!   distinct, reportable outcome, never a guess.

use crate::model::mark::Location;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// A top-level project folder currently open in the host.
///
/// The root's own absolute path is its identity; hosts supply the current
/// set fresh on every capture/resolve call because roots change between
/// calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    pub path: PathBuf,
}

impl WorkspaceRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Resolution failure for a location whose workspace root is not open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The stored root path matches none of the currently open roots. The
    /// mark still exists; its workspace was closed or moved.
    UnknownRoot { root_path: PathBuf },
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownRoot { root_path } => write!(
                f,
                "workspace root `{}` is not open; mark cannot be resolved",
                root_path.display()
            ),
        }
    }
}

impl Error for ResolveError {}

/// Resolves a stored location to the absolute path to open.
///
/// Absolute locations resolve unconditionally; existence checks are the
/// host's job. Relative locations resolve by joining onto the matching open
/// root.
///
/// # Errors
/// - `UnknownRoot` when no root in `known_roots` has the stored root path.
pub fn resolve(location: &Location, known_roots: &[WorkspaceRoot]) -> Result<PathBuf, ResolveError> {
    match location {
        Location::Absolute { path } => Ok(path.clone()),
        Location::Relative {
            root_path,
            relative_path,
        } => {
            if known_roots.iter().any(|root| &root.path == root_path) {
                Ok(root_path.join(relative_path))
            } else {
                Err(ResolveError::UnknownRoot {
                    root_path: root_path.clone(),
                })
            }
        }
    }
}

/// Captures a location for `path` against the currently open roots.
///
/// When `path` is inside at least one root, the innermost (most specific)
/// containing root wins and the location is stored root-relative. Outside
/// every root, the path is stored absolute.
pub fn capture(path: &Path, known_roots: &[WorkspaceRoot]) -> Location {
    let innermost = known_roots
        .iter()
        .filter_map(|root| {
            path.strip_prefix(&root.path)
                .ok()
                .map(|relative| (root, relative))
        })
        .max_by_key(|(root, _)| root.path.components().count());

    match innermost {
        Some((root, relative)) => Location::relative(root.path.clone(), relative),
        None => Location::absolute(path),
    }
}
