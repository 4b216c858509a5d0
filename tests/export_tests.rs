use predicates::str::contains;
use std::fs;

mod common;
use common::{arb, init_db, init_db_with_data, load_state, setup_test_db, temp_out};

#[test]
fn export_csv_layout() {
    let db = setup_test_db("export_csv_layout");
    init_db_with_data(&db);
    let out = temp_out("export_csv_layout", "csv");

    arb()
        .args(["--db", &db, "export", "--all", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "ID;Start;Ende;Dauer (hh:mm);Dauer (Min);Kategorie;Notiz");
    assert_eq!(lines.len(), 4);
    // most recent first
    assert!(lines[1].contains("2026-01-06T10:00:00.000Z;2026-01-06T10:20:00.000Z;00:20;20;Unterricht;"));
    assert!(lines[3].ends_with("2026-01-05T09:30:00.000Z;01:30;90;Unterricht;Mathe 7b"));
    assert!(lines.iter().all(|l| l.split(';').count() == 7));
}

#[test]
fn export_csv_replaces_separators() {
    let db = setup_test_db("export_csv_separators");
    init_db(&db);
    let out = temp_out("export_csv_separators", "csv");

    arb()
        .args(["--db", &db, "category", "add", "A;B"])
        .assert()
        .success();
    arb()
        .args(["--db", &db, "--now", "2026-01-05T08:00:00Z", "start", "-c", "A;B", "-n", "eins; zwei\ndrei"])
        .assert()
        .success();
    arb()
        .args(["--db", &db, "--now", "2026-01-05T08:00:40Z", "stop"])
        .assert()
        .success();

    arb()
        .args(["--db", &db, "export", "--all", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let row = content.lines().nth(1).unwrap();
    // 40 s round to one minute, the hh:mm column truncates
    assert!(row.ends_with(";00:00;1;A,B;eins, zwei drei"), "{row}");
}

#[test]
fn export_filtered_by_category() {
    let db = setup_test_db("export_category");
    init_db_with_data(&db);
    let out = temp_out("export_category", "csv");

    arb()
        .args(["--db", &db, "export", "--all", "-c", "Korrekturen", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("Deutsch 8a"));
}

#[test]
fn export_empty_selection_writes_header_only() {
    let db = setup_test_db("export_empty");
    init_db(&db);
    let out = temp_out("export_empty", "csv");

    arb()
        .args(["--db", &db, "export", "--period", "2025", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No entries"));

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content, "ID;Start;Ende;Dauer (hh:mm);Dauer (Min);Kategorie;Notiz\n");
}

#[test]
fn export_json_contains_entries() {
    let db = setup_test_db("export_json");
    init_db_with_data(&db);
    let out = temp_out("export_json", "json");

    arb()
        .args(["--db", &db, "export", "--format", "json", "--all", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert!(arr[0].get("durationMs").is_some());
    assert_eq!(arr[0]["start"], "2026-01-06T10:00:00.000Z");
}

#[test]
fn export_xlsx_creates_workbook() {
    let db = setup_test_db("export_xlsx");
    init_db_with_data(&db);
    let out = temp_out("export_xlsx", "xlsx");

    arb()
        .args(["--db", &db, "export", "--format", "xlsx", "--all", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    // xlsx files are zip archives
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_does_not_overwrite_without_consent() {
    let db = setup_test_db("export_no_overwrite");
    init_db_with_data(&db);
    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    arb()
        .args(["--db", &db, "export", "--all", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    arb()
        .args(["--db", &db, "export", "--all", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("ID;"));

    assert_eq!(load_state(&db).entries.len(), 3);
}
