use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{arb, init_db, init_db_with_data, load_state, setup_test_db};

#[test]
fn category_add_and_list() {
    let db = setup_test_db("entries_category_add");
    init_db(&db);

    arb()
        .args(["--db", &db, "category", "add", "Klassenfahrt"])
        .assert()
        .success()
        .stdout(contains("Category added: Klassenfahrt"));

    arb()
        .args(["--db", &db, "category", "add", "Klassenfahrt"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    arb()
        .args(["--db", &db, "category", "add", "   "])
        .assert()
        .failure();

    arb()
        .args(["--db", &db, "category", "list"])
        .assert()
        .success()
        .stdout(contains("Unterricht"))
        .stdout(contains("Klassenfahrt"));

    let state = load_state(&db);
    assert_eq!(state.categories.len(), 9);
    assert_eq!(state.categories.last().map(String::as_str), Some("Klassenfahrt"));
    assert_eq!(state.timer.category, "Klassenfahrt");
}

#[test]
fn list_filters_by_period_and_category() {
    let db = setup_test_db("entries_list_filters");
    init_db_with_data(&db);

    arb()
        .args(["--db", &db, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("Mathe 7b"))
        .stdout(contains("Deutsch 8a"))
        .stdout(contains("3 entries"))
        .stdout(contains("02:35"));

    arb()
        .args(["--db", &db, "list", "--period", "2026-01-06"])
        .assert()
        .success()
        .stdout(contains("1 entries"))
        .stdout(contains("Mathe 7b").not());

    arb()
        .args(["--db", &db, "list", "--all", "-c", "Korrekturen"])
        .assert()
        .success()
        .stdout(contains("Deutsch 8a"))
        .stdout(contains("Mathe 7b").not());

    arb()
        .args(["--db", &db, "list", "--period", "2025"])
        .assert()
        .success()
        .stdout(contains("No entries"));
}

#[test]
fn invalid_period_is_reported() {
    let db = setup_test_db("entries_bad_period");
    init_db(&db);

    arb()
        .args(["--db", &db, "list", "--period", "2026-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn summary_shows_category_totals() {
    let db = setup_test_db("entries_summary");
    init_db_with_data(&db);

    arb()
        .args(["--db", &db, "--now", "2026-01-05T18:00:00Z", "summary", "--period", "2026-01"])
        .assert()
        .success()
        .stdout(contains("Today: "))
        .stdout(contains("02:15"))
        .stdout(contains("Unterricht"))
        .stdout(contains("01:50"))
        .stdout(contains("Korrekturen"))
        .stdout(contains("00:45"))
        .stdout(contains("Total: "));
}

#[test]
fn edit_by_id_prefix() {
    let db = setup_test_db("entries_edit");
    init_db_with_data(&db);

    let target = load_state(&db).entries[0].clone();
    let prefix = &target.id[..8];

    arb()
        .args([
            "--db",
            &db,
            "edit",
            prefix,
            "--start",
            "2026-01-05T07:45:00Z",
            "-c",
            "Vor-/Nachbereitung",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    let edited = load_state(&db)
        .entries
        .into_iter()
        .find(|e| e.id == target.id)
        .unwrap();
    assert_eq!(edited.duration_ms, 105 * 60_000);
    assert_eq!(edited.category, "Vor-/Nachbereitung");
    assert_eq!(edited.note, target.note);
    assert_eq!(edited.end, target.end);
}

#[test]
fn edit_rejects_end_before_start() {
    let db = setup_test_db("entries_edit_invalid");
    init_db_with_data(&db);

    let before = load_state(&db).entries;

    arb()
        .args([
            "--db",
            &db,
            "edit",
            &before[0].id,
            "--end",
            "2026-01-05T07:00:00Z",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid times"));

    arb()
        .args(["--db", &db, "edit", &before[0].id, "--start", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));

    assert_eq!(load_state(&db).entries, before);
}

#[test]
fn edit_unknown_id_fails() {
    let db = setup_test_db("entries_edit_unknown");
    init_db_with_data(&db);

    arb()
        .args(["--db", &db, "edit", "no-such-id", "-n", "x"])
        .assert()
        .failure()
        .stderr(contains("No entry found"));
}

#[test]
fn delete_removes_exactly_one_entry() {
    let db = setup_test_db("entries_delete");
    init_db_with_data(&db);

    let before = load_state(&db).entries;
    let victim = before[1].id.clone();

    arb()
        .args(["--db", &db, "del", &victim, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let after = load_state(&db).entries;
    assert_eq!(after.len(), 2);
    assert!(after.iter().all(|e| e.id != victim));

    // deleting it again changes nothing
    arb()
        .args(["--db", &db, "del", &victim, "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing deleted"));
    assert_eq!(load_state(&db).entries, after);
}

#[test]
fn delete_can_be_cancelled() {
    let db = setup_test_db("entries_delete_cancel");
    init_db_with_data(&db);

    let id = load_state(&db).entries[0].id.clone();

    arb()
        .args(["--db", &db, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    assert_eq!(load_state(&db).entries.len(), 3);
}
