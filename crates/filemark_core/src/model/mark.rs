//! Mark and location domain model.
//!
//! # Responsibility
//! - Define the canonical record binding a short symbol to a file location.
//! - Keep locations stable across workspace moves by storing root-relative
//!   paths together with the root's own absolute path.
//!
//! # Invariants
//! - `symbol` is non-empty and case-sensitive; within a store it is unique.
//! - A `Location` is exactly one of absolute or root-relative; the relative
//!   shape never carries an absolute `relative_path` or a non-absolute
//!   `root_path`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Where a marked file lives, in a form stable across workspace moves.
///
/// The relative shape stores the workspace root's own absolute path verbatim,
/// so the mark resolves even after the root is closed and reopened under a
/// different handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// Fully qualified filesystem path; used when the file is outside every
    /// known workspace root.
    Absolute { path: PathBuf },
    /// Root-relative path plus the identifying absolute path of the root it
    /// was captured under.
    Relative {
        root_path: PathBuf,
        relative_path: PathBuf,
    },
}

impl Location {
    /// Creates an absolute location.
    pub fn absolute(path: impl Into<PathBuf>) -> Self {
        Self::Absolute { path: path.into() }
    }

    /// Creates a root-relative location.
    pub fn relative(root_path: impl Into<PathBuf>, relative_path: impl Into<PathBuf>) -> Self {
        Self::Relative {
            root_path: root_path.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Validates the shape invariants of this location.
    ///
    /// # Errors
    /// - `RelativePathIsAbsolute` when the relative shape carries an absolute
    ///   `relative_path`.
    /// - `RootPathNotAbsolute` when `root_path` is not fully qualified.
    /// - `AbsolutePathNotAbsolute` when the absolute shape carries a relative
    ///   path.
    pub fn validate(&self) -> Result<(), MarkValidationError> {
        match self {
            Self::Absolute { path } => {
                if !path.is_absolute() {
                    return Err(MarkValidationError::AbsolutePathNotAbsolute(path.clone()));
                }
            }
            Self::Relative {
                root_path,
                relative_path,
            } => {
                if !root_path.is_absolute() {
                    return Err(MarkValidationError::RootPathNotAbsolute(root_path.clone()));
                }
                if relative_path.is_absolute() {
                    return Err(MarkValidationError::RelativePathIsAbsolute(
                        relative_path.clone(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// A symbol bound to a file location.
///
/// Identity is the symbol; the location may be overwritten in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub symbol: String,
    pub location: Location,
}

impl Mark {
    /// Creates a mark binding `symbol` to `location`.
    ///
    /// This constructor does not validate; write paths call
    /// [`Mark::validate`] before persistence.
    pub fn new(symbol: impl Into<String>, location: Location) -> Self {
        Self {
            symbol: symbol.into(),
            location,
        }
    }

    /// Validates symbol and location invariants.
    pub fn validate(&self) -> Result<(), MarkValidationError> {
        if self.symbol.is_empty() {
            return Err(MarkValidationError::EmptySymbol);
        }
        self.location.validate()
    }
}

/// Shape violations rejected before any mark reaches persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkValidationError {
    EmptySymbol,
    AbsolutePathNotAbsolute(PathBuf),
    RootPathNotAbsolute(PathBuf),
    RelativePathIsAbsolute(PathBuf),
}

impl Display for MarkValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySymbol => write!(f, "mark symbol cannot be empty"),
            Self::AbsolutePathNotAbsolute(path) => {
                write!(
                    f,
                    "absolute location requires a fully qualified path, got `{}`",
                    path.display()
                )
            }
            Self::RootPathNotAbsolute(path) => {
                write!(
                    f,
                    "workspace root path must be absolute, got `{}`",
                    path.display()
                )
            }
            Self::RelativePathIsAbsolute(path) => {
                write!(
                    f,
                    "root-relative location cannot carry absolute path `{}`",
                    path.display()
                )
            }
        }
    }
}

impl Error for MarkValidationError {}
