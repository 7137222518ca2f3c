//! Sorted and filtered mark view.
//!
//! # Responsibility
//! - Partition marks into harpoon and non-harpoon subsets and order the
//!   selected one per settings.
//!
//! # Invariants
//! - The harpoon subset under `ByRegisterOrder` is ordered by register slot
//!   index; every other subset is ordered by ordinal symbol comparison.
//! - The result is a value copy; rendering it never touches store state.

use crate::model::mark::Mark;
use crate::model::settings::{MarkSettings, SortRule};

/// Returns the marks to display for the harpoon or non-harpoon view.
///
/// `is_harpoon` is authoritative for the harpoon axis; the settings'
/// `filter_rule` is a reserved future axis and `All` is treated as the
/// no-op default. Symbols are unique, so no sort has ties and the output is
/// fully deterministic.
pub fn sorted_and_filtered_marks(
    marks: &[Mark],
    is_harpoon: bool,
    settings: &MarkSettings,
) -> Vec<Mark> {
    let mut selected: Vec<Mark> = marks
        .iter()
        .filter(|mark| settings.is_harpoon_symbol(&mark.symbol) == is_harpoon)
        .cloned()
        .collect();

    if is_harpoon && settings.sort_rule == SortRule::ByRegisterOrder {
        // Membership is guaranteed by the partition above.
        selected.sort_by_key(|mark| settings.register_index(&mark.symbol));
    } else {
        selected.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    }

    selected
}
