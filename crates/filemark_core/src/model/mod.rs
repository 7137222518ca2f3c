//! Domain model for marks and mark policy.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep one workspace-stable location shape for every marked file.
//!
//! # Invariants
//! - A mark's identity is its symbol; symbols are case-sensitive, non-empty.
//! - A location is either absolute or root-relative, never both.

pub mod mark;
pub mod settings;
