use super::*;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =========================================================================
// helper Tests
// =========================================================================

#[test]
fn test_truncate_short_text_unchanged() {
    assert_eq!(truncate("Blue Dream", 28), "Blue Dream");
}

#[test]
fn test_truncate_long_text() {
    assert_eq!(truncate("abcdefghij", 5), "abcd…");
}

#[test]
fn test_is_xlsx() {
    assert!(is_xlsx(Path::new("report.xlsx")));
    assert!(is_xlsx(Path::new("REPORT.XLSX")));
    assert!(!is_xlsx(Path::new("output.csv")));
    assert!(!is_xlsx(Path::new("output")));
}

#[test]
fn test_resolve_layout_default() {
    assert_eq!(resolve_layout(None).unwrap(), Layout::default());
}

#[test]
fn test_resolve_layout_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "layout.yaml", "export_file_name: catalog.csv\n");
    let layout = resolve_layout(Some(path.as_path())).unwrap();
    assert_eq!(layout.export_file_name, "catalog.csv");
}

// =========================================================================
// compare Tests
// =========================================================================

#[test]
fn test_compare_writes_csv_output() {
    let dir = TempDir::new().unwrap();
    let new = write(&dir, "new.csv", "id,name,Price\nA,Alpha,10\nB,Beta,5\n");
    let old = write(&dir, "old.csv", "id,name,Price\nA,Alpha,12\n");
    let output = dir.path().join("out.csv");

    compare(new, old, Some(output.clone()), None, None, true).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "id,name,Price,N,O\nA,Alpha,10,=L2.url,=M2.url\nB,Beta,5,=L3.url,=M3.url\n"
    );
}

#[test]
fn test_compare_xlsx_output_and_report() {
    let dir = TempDir::new().unwrap();
    let new = write(&dir, "new.csv", "id,name\nA,Alpha\n");
    let old = write(&dir, "old.csv", "id,name\nB,Beta\n");
    let output = dir.path().join("out.xlsx");
    let report = dir.path().join("report.xlsx");

    compare(new, old, Some(output.clone()), Some(report.clone()), None, false).unwrap();

    assert!(output.exists());
    assert!(report.exists());
}

#[test]
fn test_compare_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let old = write(&dir, "old.csv", "id\nA\n");
    let result = compare(
        dir.path().join("nope.csv"),
        old,
        Some(dir.path().join("out.csv")),
        None,
        None,
        false,
    );
    assert!(result.is_err());
}

#[test]
fn test_compare_malformed_produces_no_output() {
    let dir = TempDir::new().unwrap();
    let new = write(&dir, "new.csv", "id,name\nA,x,extra\n");
    let old = write(&dir, "old.csv", "id,name\nA,x\n");
    let output = dir.path().join("out.csv");

    assert!(compare(new, old, Some(output.clone()), None, None, false).is_err());
    assert!(!output.exists());
}

#[test]
fn test_show_layout_rejects_bad_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "layout.yaml", "target_positions: [20, 21]\n");
    assert!(show_layout(Some(path)).is_err());
}
