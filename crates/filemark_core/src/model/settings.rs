//! User-configurable mark policy.
//!
//! # Responsibility
//! - Define the typed settings snapshot consumed by allocator and view code.
//! - Keep register order explicit: registers are tried and compacted in list
//!   order, not lexically.
//!
//! # Invariants
//! - Settings are an immutable per-call snapshot; core never iterates
//!   configuration keys dynamically.

use serde::{Deserialize, Serialize};

/// Ordering rule for the mark list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortRule {
    /// Harpoon subset ordered by register index; everything else falls back
    /// to ordinal symbol order.
    ByRegisterOrder,
    /// Ordinal symbol order for every subset.
    Alphabetical,
}

/// Reserved filter axis for the mark list view.
///
/// The harpoon/non-harpoon split is decided by the caller's selector, which
/// is authoritative; `All` is the no-op default kept for future axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    All,
    HarpoonOnly,
    NonHarpoonOnly,
}

/// Mark policy snapshot supplied by the host once per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkSettings {
    /// Reserved symbols in slot order. Membership makes a mark a harpoon
    /// register; position defines allocation and compaction order.
    pub harpoon_register_list: Vec<String>,
    /// When true, deleting a register mark compacts the remaining harpoon
    /// marks onto the list prefix. When false, gaps persist silently and
    /// allocation reuses them.
    pub harpoon_register_gap_removal: bool,
    pub sort_rule: SortRule,
    pub filter_rule: FilterRule,
}

impl MarkSettings {
    /// Returns whether `symbol` is a reserved harpoon register.
    pub fn is_harpoon_symbol(&self, symbol: &str) -> bool {
        self.harpoon_register_list
            .iter()
            .any(|register| register == symbol)
    }

    /// Returns the slot index of `symbol` in the register list.
    pub fn register_index(&self, symbol: &str) -> Option<usize> {
        self.harpoon_register_list
            .iter()
            .position(|register| register == symbol)
    }
}

impl Default for MarkSettings {
    fn default() -> Self {
        Self {
            harpoon_register_list: vec![
                "1".to_string(),
                "2".to_string(),
                "3".to_string(),
                "4".to_string(),
            ],
            harpoon_register_gap_removal: true,
            sort_rule: SortRule::ByRegisterOrder,
            filter_rule: FilterRule::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MarkSettings;

    #[test]
    fn register_membership_follows_list_order() {
        let settings = MarkSettings::default();
        assert!(settings.is_harpoon_symbol("1"));
        assert!(!settings.is_harpoon_symbol("x"));
        assert_eq!(settings.register_index("3"), Some(2));
        assert_eq!(settings.register_index("x"), None);
    }
}
