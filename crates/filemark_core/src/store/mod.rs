//! In-memory mark collection.
//!
//! # Responsibility
//! - Own the ordered, symbol-unique working set of marks between load and
//!   save.
//!
//! # Invariants
//! - At most one mark per symbol.
//! - Insertion order of non-harpoon marks is preserved across overwrites.

pub mod mark_store;
