use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::path::Path;

mod common;
use common::{init_db_with_data, rti, setup_test_db, temp_out};

#[test]
fn test_backup_plain_copy() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    rti()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();

    assert!(Path::new(&out).exists());

    let copy = rstudents::StudentStore::open(&out).expect("open backup");
    assert_eq!(copy.list_all().expect("list").len(), 2);
}

#[test]
fn test_backup_compressed_removes_plain_copy() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let out = temp_out("backup_zip", "sqlite");
    let zip_out = temp_out("backup_zip", "zip");

    rti()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(!Path::new(&out).exists());
    let meta = fs::metadata(&zip_out).expect("zip exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_backup_is_logged() {
    let db_path = setup_test_db("backup_logged");
    init_db_with_data(&db_path);

    let out = temp_out("backup_logged", "sqlite");

    rti()
        .args(["--db", &db_path, "backup", "--file", &out, "--force"])
        .assert()
        .success();

    let store = rstudents::StudentStore::open(&db_path).expect("open store");
    let log = rstudents::db::queries::load_log(&store.pool().conn).expect("log");
    assert!(log.iter().any(|(_, _, op, _, msg)| op == "backup" && msg == "Backup created"));
}

#[test]
fn test_backup_onto_database_itself_is_refused() {
    let db_path = setup_test_db("backup_self");
    init_db_with_data(&db_path);
    let size_before = fs::metadata(&db_path).expect("db exists").len();

    rti()
        .args(["--db", &db_path, "backup", "--file", &db_path, "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("database itself"));

    assert_eq!(fs::metadata(&db_path).expect("db exists").len(), size_before);
    let store = rstudents::StudentStore::open(&db_path).expect("open store");
    assert_eq!(store.list_all().expect("list").len(), 2);
}

#[test]
fn test_compressed_backup_to_zip_name_holds_full_database() {
    let db_path = setup_test_db("backup_zip_named");
    init_db_with_data(&db_path);
    let db_size = fs::metadata(&db_path).expect("db exists").len();

    let zip_out = temp_out("backup_zip_named", "zip");

    rti()
        .args([
            "--db", &db_path, "backup", "--file", &zip_out, "--compress", "--force",
        ])
        .assert()
        .success();

    let mut archive =
        zip::ZipArchive::new(fs::File::open(&zip_out).expect("open zip")).expect("read zip");
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_index(0).expect("entry");
    assert_eq!(entry.size(), db_size);

    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).expect("read entry");

    let restored = temp_out("backup_zip_named_restored", "sqlite");
    fs::write(&restored, &bytes).expect("write restored db");
    let copy = rstudents::StudentStore::open(&restored).expect("open restored");
    assert_eq!(copy.list_all().expect("list").len(), 2);
}
