//! Workspace root handling and location resolution.
//!
//! # Responsibility
//! - Capture locations relative to the workspace root containing a file.
//! - Resolve stored locations back to absolute paths against the roots
//!   currently open.
//!
//! # Invariants
//! - A relative location resolves only against an exact root-path match;
//!   core never silently guesses a different open root.

pub mod resolve;
