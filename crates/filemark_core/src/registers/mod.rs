//! Harpoon register allocation and compaction.
//!
//! # Responsibility
//! - Find the first free register slot in configured order.
//! - Close gaps left by deleted register marks.
//!
//! # Invariants
//! - Registers are tried and compacted in register-list order, never
//!   lexically.
//! - Compaction renames symbols only; locations and store positions are
//!   untouched.

pub mod alloc;
