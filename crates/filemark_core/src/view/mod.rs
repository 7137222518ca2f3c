//! Presentation-ready mark listing.
//!
//! # Responsibility
//! - Produce the sorted, filtered mark sequence a presentation layer can
//!   render without further business logic.
//!
//! # Invariants
//! - Identical store state and settings always yield an identical sequence.

pub mod listing;
