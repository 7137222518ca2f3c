use filemark_core::db::open_db_in_memory;
use filemark_core::{
    Location, MarkScope, MarkService, MarkSettings, ServiceError, SqliteMarkRepository,
};

fn settings(registers: &[&str], gap_removal: bool) -> MarkSettings {
    MarkSettings {
        harpoon_register_list: registers.iter().map(|r| r.to_string()).collect(),
        harpoon_register_gap_removal: gap_removal,
        ..MarkSettings::default()
    }
}

#[test]
fn registers_allocate_in_list_order() {
    let conn = open_db_in_memory().unwrap();
    let service = MarkService::new(SqliteMarkRepository::new(&conn));
    let settings = settings(&["1", "2", "3"], true);

    let first = service
        .add_to_first_free_register(
            MarkScope::Workspace,
            Location::absolute("/a"),
            &settings,
        )
        .unwrap();
    let second = service
        .add_to_first_free_register(
            MarkScope::Workspace,
            Location::absolute("/b"),
            &settings,
        )
        .unwrap();

    assert_eq!(first, "1");
    assert_eq!(second, "2");
}

#[test]
fn full_registers_report_no_free_registers_and_create_nothing() {
    let conn = open_db_in_memory().unwrap();
    let service = MarkService::new(SqliteMarkRepository::new(&conn));
    let settings = settings(&["1"], true);

    service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/a"), &settings)
        .unwrap();
    let err = service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/b"), &settings)
        .unwrap_err();

    assert!(matches!(err, ServiceError::NoFreeRegisters));
    let marks = service
        .list_marks(MarkScope::Workspace, true, &settings)
        .unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].location, Location::absolute("/a"));
}

#[test]
fn deleting_a_register_compacts_remaining_marks_onto_prefix() {
    let conn = open_db_in_memory().unwrap();
    let service = MarkService::new(SqliteMarkRepository::new(&conn));
    let settings = settings(&["1", "2", "3"], true);

    // Occupy "1" and "3", leaving "2" as a pre-existing gap.
    service
        .set_mark(
            MarkScope::Workspace,
            filemark_core::Mark::new("1", Location::absolute("/a")),
        )
        .unwrap();
    service
        .set_mark(
            MarkScope::Workspace,
            filemark_core::Mark::new("3", Location::absolute("/c")),
        )
        .unwrap();

    service
        .delete_mark(MarkScope::Workspace, "1", &settings)
        .unwrap();

    let marks = service
        .list_marks(MarkScope::Workspace, true, &settings)
        .unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].symbol, "1");
    assert_eq!(marks[0].location, Location::absolute("/c"));
}

#[test]
fn gap_removal_off_leaves_gaps_and_allocation_reuses_them() {
    let conn = open_db_in_memory().unwrap();
    let service = MarkService::new(SqliteMarkRepository::new(&conn));
    let settings = settings(&["1", "2", "3"], false);

    service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/a"), &settings)
        .unwrap();
    service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/b"), &settings)
        .unwrap();
    service
        .delete_mark(MarkScope::Workspace, "1", &settings)
        .unwrap();

    // "2" keeps its register; the freed "1" is the next allocation.
    let marks = service
        .list_marks(MarkScope::Workspace, true, &settings)
        .unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].symbol, "2");

    let reused = service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/c"), &settings)
        .unwrap();
    assert_eq!(reused, "1");
}

#[test]
fn add_delete_compact_allocate_scenario() {
    let conn = open_db_in_memory().unwrap();
    let service = MarkService::new(SqliteMarkRepository::new(&conn));
    let settings = settings(&["1", "2", "3"], true);

    service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/a"), &settings)
        .unwrap();
    service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/b"), &settings)
        .unwrap();

    service
        .delete_mark(MarkScope::Workspace, "1", &settings)
        .unwrap();

    // The mark formerly at "2" compacted to "1"; "2" and "3" are free.
    let marks = service
        .list_marks(MarkScope::Workspace, true, &settings)
        .unwrap();
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].symbol, "1");
    assert_eq!(marks[0].location, Location::absolute("/b"));

    let next = service
        .add_to_first_free_register(MarkScope::Workspace, Location::absolute("/c"), &settings)
        .unwrap();
    assert_eq!(next, "2");
}
