#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rstudents::StudentRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rti() -> Command {
    cargo_bin_cmd!("rstudents")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstudents.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh, empty directory under the temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstudents_dir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Initialize DB through the CLI (test mode: no config file written)
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add two students via the CLI
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rti()
        .args([
            "--db", db_path, "add", "--name", "Nguyen Van A", "--sid", "001", "--grade", "8.5",
        ])
        .assert()
        .success();

    rti()
        .args([
            "--db",
            db_path,
            "add",
            "--name",
            "Tran Thi B",
            "--sid",
            "002",
            "--grade",
            "9.25",
            "--graduated",
            "--photo",
            "/sdcard/photos/b.jpg",
        ])
        .assert()
        .success();
}

/// Record with every field set, as the add form would build it
pub fn student(name: &str, sid: &str, grade: f64, graduated: bool, photo: &str) -> StudentRecord {
    StudentRecord {
        id: None,
        full_name: Some(name.to_string()),
        student_id: Some(sid.to_string()),
        average_grade: Some(grade),
        has_graduated: Some(graduated),
        photo_path: Some(photo.to_string()),
    }
}
