use bill_maker::{pdf, Bill, ShopProfile};
use chrono::{DateTime, Local, TimeZone};

fn fixed_now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap()
}

fn sample_bill() -> Bill {
    let mut bill = Bill::new("Ravi", "9999999999");
    bill.add_item("Rice", 2, 50.0).unwrap();
    bill
}

#[test]
fn export_writes_named_pdf_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = pdf::export(&sample_bill(), &ShopProfile::default(), dir.path(), fixed_now())
        .unwrap();
    assert_eq!(path.file_name().unwrap(), "Ravi_9999999999.pdf");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn repeat_export_overwrites_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let profile = ShopProfile::default();
    let bill = sample_bill();
    let now = fixed_now();

    let first = pdf::export(&bill, &profile, dir.path(), now).unwrap();
    let first_bytes = std::fs::read(&first).unwrap();

    let second = pdf::export(&bill, &profile, dir.path(), now).unwrap();
    assert_eq!(first, second);
    let second_bytes = std::fs::read(&second).unwrap();

    // Same bill, same timestamp: the overwritten file has the same structure.
    assert_eq!(first_bytes.len(), second_bytes.len());
    // Only the one receipt (no stray temp files) remains in the directory.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn export_with_empty_identity_is_refused_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut bill = Bill::new("", "9999999999");
    bill.add_item("Rice", 2, 50.0).unwrap();

    let err = pdf::export(&bill, &ShopProfile::default(), dir.path(), fixed_now()).unwrap_err();
    assert!(err.is_validation());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn longer_bills_produce_larger_documents() {
    let profile = ShopProfile::default();
    let now = fixed_now();

    let short = pdf::render_to_bytes(&sample_bill(), &profile, now).unwrap();

    let mut long_bill = sample_bill();
    for i in 0..20 {
        long_bill.add_item(&format!("Item {}", i), 1, 5.0).unwrap();
    }
    let long = pdf::render_to_bytes(&long_bill, &profile, now).unwrap();
    assert!(long.len() > short.len());
}
