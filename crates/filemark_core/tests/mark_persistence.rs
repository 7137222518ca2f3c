use filemark_core::db::open_db_in_memory;
use filemark_core::{
    Location, Mark, MarkRepository, MarkScope, RepoError, SqliteMarkRepository,
};

fn mark(symbol: &str, location: Location) -> Mark {
    Mark::new(symbol, location)
}

#[test]
fn save_and_load_roundtrip_preserves_order_and_shapes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMarkRepository::new(&conn);

    let marks = vec![
        mark("a", Location::absolute("/home/user/notes.md")),
        mark("1", Location::relative("/work/project", "src/main.rs")),
        mark("b", Location::relative("/work/project", "README.md")),
    ];
    repo.save_marks(MarkScope::Workspace, &marks).unwrap();

    let loaded = repo.load_marks(MarkScope::Workspace).unwrap();
    assert_eq!(loaded, marks);
}

#[test]
fn scopes_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMarkRepository::new(&conn);

    let global = vec![mark("g", Location::absolute("/global/file"))];
    let workspace = vec![mark("w", Location::absolute("/workspace/file"))];
    repo.save_marks(MarkScope::Global, &global).unwrap();
    repo.save_marks(MarkScope::Workspace, &workspace).unwrap();

    assert_eq!(repo.load_marks(MarkScope::Global).unwrap(), global);
    assert_eq!(repo.load_marks(MarkScope::Workspace).unwrap(), workspace);

    // Rewriting one scope leaves the other untouched.
    repo.save_marks(MarkScope::Workspace, &[]).unwrap();
    assert_eq!(repo.load_marks(MarkScope::Global).unwrap(), global);
    assert!(repo.load_marks(MarkScope::Workspace).unwrap().is_empty());
}

#[test]
fn save_replaces_previous_working_set() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMarkRepository::new(&conn);

    repo.save_marks(
        MarkScope::Workspace,
        &[
            mark("a", Location::absolute("/one")),
            mark("b", Location::absolute("/two")),
        ],
    )
    .unwrap();
    repo.save_marks(
        MarkScope::Workspace,
        &[mark("b", Location::absolute("/two"))],
    )
    .unwrap();

    let loaded = repo.load_marks(MarkScope::Workspace).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].symbol, "b");
}

#[test]
fn invalid_marks_are_rejected_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteMarkRepository::new(&conn);

    repo.save_marks(
        MarkScope::Workspace,
        &[mark("a", Location::absolute("/keep"))],
    )
    .unwrap();

    let err = repo
        .save_marks(
            MarkScope::Workspace,
            &[mark("", Location::absolute("/bad"))],
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // The failed save must not have touched the stored working set.
    let loaded = repo.load_marks(MarkScope::Workspace).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].symbol, "a");
}

#[test]
fn corrupt_rows_are_reported_not_masked() {
    let conn = open_db_in_memory().unwrap();

    // A relative row without its root is invalid persisted state.
    conn.execute(
        "INSERT INTO marks (scope, symbol, location_kind, root_path, file_path, position)
         VALUES ('workspace', 'x', 'relative', NULL, 'src/main.rs', 0);",
        [],
    )
    .unwrap();

    let repo = SqliteMarkRepository::new(&conn);
    let err = repo.load_marks(MarkScope::Workspace).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn file_backed_db_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("marks.db");

    {
        let conn = filemark_core::db::open_db(&db_path).unwrap();
        let repo = SqliteMarkRepository::new(&conn);
        repo.save_marks(
            MarkScope::Global,
            &[mark("a", Location::relative("/work/project", "src/lib.rs"))],
        )
        .unwrap();
    }

    let conn = filemark_core::db::open_db(&db_path).unwrap();
    let repo = SqliteMarkRepository::new(&conn);
    let loaded = repo.load_marks(MarkScope::Global).unwrap();
    assert_eq!(
        loaded,
        vec![mark("a", Location::relative("/work/project", "src/lib.rs"))]
    );
}
