//! Mark registry use-case service.
//!
//! # Responsibility
//! - Own the load, mutate, save cycle for every mark mutation.
//! - Wire register allocation, gap compaction, view building and location
//!   resolution behind one API.
//!
//! # Invariants
//! - Nothing is saved when a precondition fails; a reported error implies no
//!   state change.
//! - Settings and workspace roots are per-call snapshots; the service holds
//!   no configuration of its own.
//! - One logical service per scope; callers serialize access.

use crate::model::mark::{Location, Mark};
use crate::model::settings::MarkSettings;
use crate::registers::alloc::{find_first_unused_register, remove_gaps_for_harpoon_marks};
use crate::repo::mark_repo::{MarkRepository, MarkScope, RepoError};
use crate::store::mark_store::MarkStore;
use crate::view::listing::sorted_and_filtered_marks;
use crate::workspace::resolve::{capture, resolve, ResolveError, WorkspaceRoot};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Caller-facing error for registry operations.
///
/// Every variant is recoverable; the calling layer decides user-visible
/// behavior.
#[derive(Debug)]
pub enum ServiceError {
    /// Delete/resolve on an unknown symbol. No state change.
    NotFound(String),
    /// Every harpoon register is occupied; no mark was created.
    NoFreeRegisters,
    /// The mark exists but its workspace root is closed or moved. Distinct
    /// from `NotFound` so callers can explain why.
    Unresolvable(ResolveError),
    /// The storage collaborator failed; surfaced unmodified, never retried.
    /// A failed save means the mutation may not have persisted.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(symbol) => write!(f, "mark not found: `{symbol}`"),
            Self::NoFreeRegisters => write!(f, "no harpoon registers available"),
            Self::Unresolvable(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::NoFreeRegisters => None,
            Self::Unresolvable(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ResolveError> for ServiceError {
    fn from(value: ResolveError) -> Self {
        Self::Unresolvable(value)
    }
}

/// Use-case service wrapper for the mark registry.
pub struct MarkService<R: MarkRepository> {
    repo: R,
}

impl<R: MarkRepository> MarkService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds `mark`, or overwrites the location of the existing mark with the
    /// same symbol. Overwrite is intentional and never reported as failure.
    pub fn set_mark(&self, scope: MarkScope, mark: Mark) -> ServiceResult<()> {
        mark.validate().map_err(RepoError::from)?;

        let mut store = self.load_store(scope)?;
        let symbol = mark.symbol.clone();
        store.add_or_overwrite(mark);
        self.save_store(scope, &store)?;

        info!("event=mark_set module=service status=ok symbol={symbol}");
        Ok(())
    }

    /// Captures a location for `path` against the current roots, then sets
    /// the mark. File-existence checking is the host's job before calling.
    pub fn mark_file(
        &self,
        scope: MarkScope,
        symbol: impl Into<String>,
        path: &Path,
        known_roots: &[WorkspaceRoot],
    ) -> ServiceResult<()> {
        let location = capture(path, known_roots);
        self.set_mark(scope, Mark::new(symbol, location))
    }

    /// Marks `location` under the first free harpoon register.
    ///
    /// Returns the allocated register symbol.
    ///
    /// # Errors
    /// - `NoFreeRegisters` when every register is occupied; no mark is
    ///   created and nothing is saved.
    pub fn add_to_first_free_register(
        &self,
        scope: MarkScope,
        location: Location,
        settings: &MarkSettings,
    ) -> ServiceResult<String> {
        let mut store = self.load_store(scope)?;

        let register =
            find_first_unused_register(&store.all(), &settings.harpoon_register_list)
                .ok_or(ServiceError::NoFreeRegisters)?;

        store.add_or_overwrite(Mark::new(register.clone(), location));
        self.save_store(scope, &store)?;

        info!("event=register_allocated module=service status=ok register={register}");
        Ok(register)
    }

    /// Deletes the mark with `symbol`, compacting harpoon registers when the
    /// gap-removal toggle is on.
    ///
    /// # Errors
    /// - `NotFound` when no mark has `symbol`; no state change.
    pub fn delete_mark(
        &self,
        scope: MarkScope,
        symbol: &str,
        settings: &MarkSettings,
    ) -> ServiceResult<()> {
        let mut store = self.load_store(scope)?;

        if !store.remove(symbol) {
            return Err(ServiceError::NotFound(symbol.to_string()));
        }

        if settings.harpoon_register_gap_removal {
            let compacted =
                remove_gaps_for_harpoon_marks(store.into_marks(), &settings.harpoon_register_list);
            store = MarkStore::from_marks(compacted);
        }

        self.save_store(scope, &store)?;

        info!("event=mark_deleted module=service status=ok symbol={symbol}");
        Ok(())
    }

    /// Returns the presentation-ready mark list for the harpoon or
    /// non-harpoon view. Read-only.
    pub fn list_marks(
        &self,
        scope: MarkScope,
        is_harpoon: bool,
        settings: &MarkSettings,
    ) -> ServiceResult<Vec<Mark>> {
        let store = self.load_store(scope)?;
        Ok(sorted_and_filtered_marks(&store.all(), is_harpoon, settings))
    }

    /// Resolves the mark with `symbol` to the absolute path to open.
    ///
    /// # Errors
    /// - `NotFound` when no mark has `symbol`.
    /// - `Unresolvable` when the mark's workspace root is not among
    ///   `known_roots`.
    pub fn resolve_mark(
        &self,
        scope: MarkScope,
        symbol: &str,
        known_roots: &[WorkspaceRoot],
    ) -> ServiceResult<PathBuf> {
        let store = self.load_store(scope)?;
        let mark = store
            .find(symbol)
            .ok_or_else(|| ServiceError::NotFound(symbol.to_string()))?;
        Ok(resolve(&mark.location, known_roots)?)
    }

    fn load_store(&self, scope: MarkScope) -> ServiceResult<MarkStore> {
        Ok(MarkStore::from_marks(self.repo.load_marks(scope)?))
    }

    fn save_store(&self, scope: MarkScope, store: &MarkStore) -> ServiceResult<()> {
        self.repo.save_marks(scope, &store.all())?;
        Ok(())
    }
}
