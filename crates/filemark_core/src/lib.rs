//! Core domain logic for Filemark.
//! This crate is the single source of truth for mark-registry invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod registers;
pub mod repo;
pub mod service;
pub mod store;
pub mod view;
pub mod workspace;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::mark::{Location, Mark, MarkValidationError};
pub use model::settings::{FilterRule, MarkSettings, SortRule};
pub use registers::alloc::{find_first_unused_register, remove_gaps_for_harpoon_marks};
pub use repo::mark_repo::{
    MarkRepository, MarkScope, RepoError, RepoResult, SqliteMarkRepository,
};
pub use service::mark_service::{MarkService, ServiceError, ServiceResult};
pub use store::mark_store::MarkStore;
pub use view::listing::sorted_and_filtered_marks;
pub use workspace::resolve::{capture, resolve, ResolveError, WorkspaceRoot};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
