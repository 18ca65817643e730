use rstudents::core::edit::EditPatch;
use rstudents::{StudentForm, StudentRecord, parse_grade};

#[test]
fn test_parse_grade_numbers() {
    assert_eq!(parse_grade("3.5"), 3.5);
    assert_eq!(parse_grade("10"), 10.0);
    assert_eq!(parse_grade("-1"), -1.0);
}

#[test]
fn test_parse_grade_invalid_is_zero() {
    assert_eq!(parse_grade("abc"), 0.0);
    assert_eq!(parse_grade(""), 0.0);
    assert_eq!(parse_grade("   "), 0.0);
    assert_eq!(parse_grade("8,5"), 0.0);
    assert_eq!(parse_grade(" 7.25 "), 0.0);
}

#[test]
fn test_form_to_record_keeps_empty_strings() {
    let form = StudentForm {
        full_name: "A".into(),
        student_id: "001".into(),
        average_grade: "oops".into(),
        has_graduated: false,
        photo_path: String::new(),
    };

    let rec = form.to_record();
    assert_eq!(
        rec,
        StudentRecord {
            id: None,
            full_name: Some("A".into()),
            student_id: Some("001".into()),
            average_grade: Some(0.0),
            has_graduated: Some(false),
            photo_path: Some(String::new()),
        }
    );
    assert_eq!(rec.photo(), None);
}

#[test]
fn test_form_prefill_from_record_with_nulls() {
    let rec = StudentRecord {
        id: Some(3),
        ..StudentRecord::default()
    };

    let form = StudentForm::from_record(&rec);
    assert_eq!(form.full_name, "");
    assert_eq!(form.student_id, "");
    assert_eq!(form.average_grade, "0");
    assert!(!form.has_graduated);
    assert_eq!(form.photo_path, "");
}

#[test]
fn test_into_update_is_full_replace_keeping_id() {
    let original = StudentRecord {
        id: Some(7),
        full_name: Some("Old".into()),
        student_id: Some("S1".into()),
        average_grade: Some(4.0),
        has_graduated: Some(true),
        photo_path: Some("old.png".into()),
    };

    let mut form = StudentForm::from_record(&original);
    assert_eq!(form.average_grade, "4");

    form.full_name = "New".into();
    form.has_graduated = false;
    form.photo_path = String::new();

    let updated = form.into_update(&original);
    assert_eq!(updated.id, Some(7));
    assert_eq!(updated.full_name.as_deref(), Some("New"));
    assert_eq!(updated.student_id.as_deref(), Some("S1"));
    assert_eq!(updated.average_grade, Some(4.0));
    assert_eq!(updated.has_graduated, Some(false));
    assert_eq!(updated.photo_path.as_deref(), Some(""));
}

#[test]
fn test_edit_patch_overrides_only_given_fields() {
    let original = StudentRecord {
        id: Some(1),
        full_name: Some("Kept".into()),
        student_id: Some("001".into()),
        average_grade: Some(6.5),
        has_graduated: Some(false),
        photo_path: Some("p.jpg".into()),
    };

    let patch = EditPatch {
        average_grade: Some("9.0".into()),
        has_graduated: Some(true),
        ..EditPatch::default()
    };

    let updated = patch
        .apply_to(StudentForm::from_record(&original))
        .into_update(&original);

    assert_eq!(
        updated,
        StudentRecord {
            average_grade: Some(9.0),
            has_graduated: Some(true),
            ..original
        }
    );
}

#[test]
fn test_photo_only_when_non_empty() {
    let mut rec = StudentRecord::default();
    assert_eq!(rec.photo(), None);

    rec.photo_path = Some("content://media/external/images/1".into());
    assert_eq!(rec.photo(), Some("content://media/external/images/1"));
}
