//! Register slot allocation and gap compaction.
//!
//! # Responsibility
//! - Treat the configured register list as an ordered slot sequence and keep
//!   used slots packed at its front.
//!
//! # Invariants
//! - After compaction there is no slot pair `i < j` with `j` occupied and
//!   `i` free.
//! - Non-register marks keep their symbol and store position.

use crate::model::mark::Mark;

/// Returns the first register in `register_list` not currently used as a
/// mark symbol.
///
/// Returns `None` when every register is occupied, or when the list is
/// empty.
pub fn find_first_unused_register(marks: &[Mark], register_list: &[String]) -> Option<String> {
    register_list
        .iter()
        .find(|register| !marks.iter().any(|mark| &mark.symbol == *register))
        .cloned()
}

/// Reassigns harpoon marks onto the register-list prefix, closing gaps left
/// by deletion.
///
/// Marks whose symbol is in `register_list` are ordered by their current
/// register's slot index (each register is used at most once, so there are
/// no ties) and renamed to `register_list[0], register_list[1], ...` in that
/// order. Only the symbol changes; every mark keeps its location and its
/// position in the store. Marks outside the register list pass through
/// untouched. An empty register list is a no-op.
pub fn remove_gaps_for_harpoon_marks(mut marks: Vec<Mark>, register_list: &[String]) -> Vec<Mark> {
    if register_list.is_empty() {
        return marks;
    }

    let mut occupied: Vec<(usize, usize)> = marks
        .iter()
        .enumerate()
        .filter_map(|(store_index, mark)| {
            register_list
                .iter()
                .position(|register| register == &mark.symbol)
                .map(|slot| (slot, store_index))
        })
        .collect();
    occupied.sort_by_key(|(slot, _)| *slot);

    for (packed_slot, (_, store_index)) in occupied.iter().enumerate() {
        marks[*store_index].symbol = register_list[packed_slot].clone();
    }

    marks
}
