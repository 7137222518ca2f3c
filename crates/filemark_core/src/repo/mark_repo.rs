//! Mark repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide keyed load/save over the two persistence scopes.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Mark::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - A saved scope round-trips losslessly: mark order and the
//!   absolute/relative location distinction are preserved exactly.

use crate::db::DbError;
use crate::model::mark::{Location, Mark, MarkValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const MARK_SELECT_SQL: &str = "SELECT
    symbol,
    location_kind,
    root_path,
    file_path
FROM marks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for mark persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(MarkValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted mark data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<MarkValidationError> for RepoError {
    fn from(value: MarkValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Independent persistence scope for a working set of marks.
///
/// The core is agnostic to which scope is active; callers pick one per
/// operation and the scopes never bleed into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkScope {
    Global,
    Workspace,
}

impl MarkScope {
    fn as_db(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Workspace => "workspace",
        }
    }
}

/// Keyed storage contract the registry persists through.
///
/// This is the sole durability mechanism: the core holds no persisted state
/// beyond what `load_marks` returns and `save_marks` writes.
pub trait MarkRepository {
    fn load_marks(&self, scope: MarkScope) -> RepoResult<Vec<Mark>>;
    fn save_marks(&self, scope: MarkScope, marks: &[Mark]) -> RepoResult<()>;
}

/// SQLite-backed mark repository.
pub struct SqliteMarkRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMarkRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MarkRepository for SqliteMarkRepository<'_> {
    fn load_marks(&self, scope: MarkScope) -> RepoResult<Vec<Mark>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MARK_SELECT_SQL}
             WHERE scope = ?1
             ORDER BY position ASC;"
        ))?;

        let mut rows = stmt.query(params![scope.as_db()])?;
        let mut marks = Vec::new();

        while let Some(row) = rows.next()? {
            marks.push(parse_mark_row(row)?);
        }

        Ok(marks)
    }

    fn save_marks(&self, scope: MarkScope, marks: &[Mark]) -> RepoResult<()> {
        for mark in marks {
            mark.validate()?;
        }

        // Replace the scope's rows as one atomic unit so a failed save never
        // leaves a half-written working set.
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM marks WHERE scope = ?1;", params![scope.as_db()])?;

        for (position, mark) in marks.iter().enumerate() {
            let (location_kind, root_path, file_path) = location_to_columns(&mark.location)?;
            tx.execute(
                "INSERT INTO marks (
                    scope,
                    symbol,
                    location_kind,
                    root_path,
                    file_path,
                    position
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    scope.as_db(),
                    mark.symbol.as_str(),
                    location_kind,
                    root_path,
                    file_path,
                    position as i64,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}

fn parse_mark_row(row: &Row<'_>) -> RepoResult<Mark> {
    let symbol: String = row.get("symbol")?;
    let location_kind: String = row.get("location_kind")?;
    let root_path: Option<String> = row.get("root_path")?;
    let file_path: String = row.get("file_path")?;

    let location = match (location_kind.as_str(), root_path) {
        ("absolute", None) => Location::absolute(file_path),
        ("absolute", Some(_)) => {
            return Err(RepoError::InvalidData(format!(
                "absolute mark `{symbol}` carries a root_path"
            )));
        }
        ("relative", Some(root)) => Location::relative(root, file_path),
        ("relative", None) => {
            return Err(RepoError::InvalidData(format!(
                "relative mark `{symbol}` is missing its root_path"
            )));
        }
        (other, _) => {
            return Err(RepoError::InvalidData(format!(
                "invalid location_kind `{other}` in marks.location_kind"
            )));
        }
    };

    let mark = Mark::new(symbol, location);
    mark.validate()?;
    Ok(mark)
}

fn location_to_columns(location: &Location) -> RepoResult<(&'static str, Option<String>, String)> {
    match location {
        Location::Absolute { path } => Ok(("absolute", None, path_to_text(path)?)),
        Location::Relative {
            root_path,
            relative_path,
        } => Ok((
            "relative",
            Some(path_to_text(root_path)?),
            path_to_text(relative_path)?,
        )),
    }
}

// Paths must be valid UTF-8 to persist; lossy conversion would corrupt the
// stored location on reload.
fn path_to_text(path: &Path) -> RepoResult<String> {
    path.to_str().map(str::to_string).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "path `{}` is not valid UTF-8 and cannot be persisted",
            path.display()
        ))
    })
}
