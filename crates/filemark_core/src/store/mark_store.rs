//! Ordered, symbol-unique mark store.
//!
//! # Responsibility
//! - Provide add-or-overwrite, remove, and value-copy read access.
//! - Keep store positions stable: overwriting a symbol never moves it.
//!
//! # Invariants
//! - At most one mark per symbol after any operation sequence.
//! - Reads return value copies; external code never mutates internal state.

use crate::model::mark::Mark;

/// Ordered collection of marks keyed by unique symbol.
///
/// Persistence is delegated to the repository collaborator; the store only
/// holds the in-memory working set the caller supplies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkStore {
    marks: Vec<Mark>,
}

impl MarkStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a loaded working set.
    ///
    /// Later duplicates overwrite earlier ones, keeping the earlier
    /// position, so a store built from any input satisfies uniqueness.
    pub fn from_marks(marks: Vec<Mark>) -> Self {
        let mut store = Self::new();
        for mark in marks {
            store.add_or_overwrite(mark);
        }
        store
    }

    /// Adds `mark`, or replaces the location of the existing mark with the
    /// same symbol. Replacement keeps the mark's store position unchanged.
    pub fn add_or_overwrite(&mut self, mark: Mark) {
        match self
            .marks
            .iter_mut()
            .find(|existing| existing.symbol == mark.symbol)
        {
            Some(existing) => existing.location = mark.location,
            None => self.marks.push(mark),
        }
    }

    /// Removes the mark with `symbol`.
    ///
    /// Returns whether a removal occurred; callers use this to decide
    /// whether register compaction should run. Absent symbols are a no-op.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.marks.len();
        self.marks.retain(|mark| mark.symbol != symbol);
        self.marks.len() != before
    }

    /// Returns a copy of the mark with `symbol`, if present.
    pub fn find(&self, symbol: &str) -> Option<Mark> {
        self.marks.iter().find(|mark| mark.symbol == symbol).cloned()
    }

    /// Returns a copy of the full working set in store order.
    pub fn all(&self) -> Vec<Mark> {
        self.marks.clone()
    }

    /// Consumes the store, yielding the working set in store order.
    pub fn into_marks(self) -> Vec<Mark> {
        self.marks
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}
