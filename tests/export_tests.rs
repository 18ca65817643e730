use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_export_csv_all_students() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_all", "csv");

    rti()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 2 student(s)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("id,full_name,student_id,average_grade,has_graduated,photo_path")
    );
    assert!(content.contains("Nguyen Van A,001,8.5,false,"));
    assert!(content.contains("Tran Thi B,002,9.25,true,/sdcard/photos/b.jpg"));
}

#[test]
fn test_export_json_inferred_from_extension() {
    let db_path = setup_test_db("export_json_infer");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_infer", "json");

    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["full_name"], "Nguyen Van A");
    assert_eq!(rows[0]["average_grade"], 8.5);
    assert_eq!(rows[1]["has_graduated"], true);
    assert_eq!(rows[1]["photo_path"], "/sdcard/photos/b.jpg");
}

#[test]
fn test_export_unknown_extension_fails() {
    let db_path = setup_test_db("export_unknown_ext");
    init_db_with_data(&db_path);

    let out = temp_out("export_unknown_ext", "txt");

    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("Export format not supported: txt"));
}

#[test]
fn test_export_empty_database_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No students to export."));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_requires_confirmation() {
    let db_path = setup_test_db("export_existing");
    init_db_with_data(&db_path);

    let out = temp_out("export_existing", "csv");
    fs::write(&out, "keep me").expect("seed file");

    rti()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    rti()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("Nguyen Van A"));
}
