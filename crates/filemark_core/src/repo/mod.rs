//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the keyed load/save contract the registry persists through.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Mark::validate()` before persistence.
//! - Repository reads reject invalid persisted state instead of masking it.

pub mod mark_repo;
