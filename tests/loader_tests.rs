//! Loading fixtures and running full comparisons on them

use pretty_assertions::assert_eq;
use sheetcmp::core::{compare_bytes, compare_tables};
use sheetcmp::loader::{load_table, load_table_from_path};
use sheetcmp::writer::export_to_string;
use sheetcmp::{Layout, PriceChange, SheetError, TableSide};
use std::path::PathBuf;

fn test_data_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("test-data");
    path.push(filename);
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_footer_row_dropped() {
    let table = load_table_from_path(
        &test_data_path("catalog_new.csv"),
        TableSide::New,
        &Layout::default(),
    )
    .unwrap();

    assert_eq!(table.column_count(), 16);
    assert_eq!(table.ids().collect::<Vec<_>>(), vec!["P001", "P002", "P004"]);
}

#[test]
fn test_malformed_fixture_fails() {
    let err = load_table_from_path(
        &test_data_path("malformed.csv"),
        TableSide::Old,
        &Layout::default(),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SheetError::Parse {
            table: TableSide::Old,
            row: 3,
            ..
        }
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_table_from_path(
        &test_data_path("does_not_exist.csv"),
        TableSide::New,
        &Layout::default(),
    )
    .unwrap_err();

    assert!(matches!(err, SheetError::Io(_)));
}

#[test]
fn test_values_are_text_not_numbers() {
    let table = load_table(b"id,price\n007,10.00\n", TableSide::New, &Layout::default()).unwrap();
    assert_eq!(table.rows()[0], vec!["007", "10.00"]);
}

// ═══════════════════════════════════════════════════════════════════════════
// FULL COMPARISONS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_catalog_comparison() {
    let layout = Layout::default();
    let new = load_table_from_path(&test_data_path("catalog_new.csv"), TableSide::New, &layout)
        .unwrap();
    let old = load_table_from_path(&test_data_path("catalog_old.csv"), TableSide::Old, &layout)
        .unwrap();

    let comparison = compare_tables(&new, &old, &layout);

    let added: Vec<(String, String)> = comparison
        .add_list()
        .into_iter()
        .map(|e| (e.id, e.description))
        .collect();
    assert_eq!(added, vec![("P004".to_string(), "Sour Diesel".to_string())]);

    let deleted: Vec<String> = comparison.delete_list().into_iter().map(|e| e.id).collect();
    assert_eq!(deleted, vec!["P003"]);

    assert_eq!(
        comparison.price_change_list(),
        &[PriceChange {
            id: "P002".to_string(),
            description: "OG Kush".to_string(),
            new_price: "40.00".to_string(),
            old_price: "38.00".to_string(),
        }]
    );

    // 16 columns: N/O (positions 13/14) are overwritten in place
    assert_eq!(comparison.export.columns(), new.columns());
    assert_eq!(comparison.export.cell(0, 13), Some("=L2.url"));
    assert_eq!(comparison.export.cell(0, 14), Some("=M2.url"));
    assert_eq!(comparison.export.cell(2, 13), Some("=L4.url"));
    assert_eq!(comparison.export.cell(2, 15), Some("2026-10-02"));
}

#[test]
fn test_narrow_comparison_without_prices() {
    let new = std::fs::read(test_data_path("narrow_new.csv")).unwrap();
    let old = std::fs::read(test_data_path("narrow_old.csv")).unwrap();

    let comparison = compare_bytes(&new, &old, &Layout::default()).unwrap();
    let summary = comparison.summary();

    assert_eq!(summary.added, 1);
    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.common, 1);
    assert_eq!(summary.price_changes, None);
    assert_eq!(
        export_to_string(&comparison.export).unwrap(),
        "SKU,Description,Size,Color,Stock,N,O\n\
         S1,Widget,M,Red,3,=L2.url,=M2.url\n\
         S2,Gadget,L,Blue,0,=L3.url,=M3.url\n"
    );
}

#[test]
fn test_new_only_scenario() {
    let comparison = compare_bytes(b"id\nB\n", b"id\n", &Layout::default()).unwrap();

    assert_eq!(comparison.to_add.ids().collect::<Vec<_>>(), vec!["B"]);
    assert!(comparison.to_delete.is_empty());
    assert!(comparison.price_change_list().is_empty());
}

#[test]
fn test_custom_layout_fixture() {
    let layout = Layout::load(&test_data_path("layout_custom.yaml")).unwrap();
    let comparison = compare_bytes(b"id,name\nA,x\n", b"id,name\n", &layout).unwrap();

    assert_eq!(comparison.export.columns(), &["id", "name", "Link N", "Link O"]);
    assert_eq!(comparison.export.cell(0, 2), Some("=P2.url"));
    assert_eq!(layout.export_file_name, "supplier_output.csv");
}
