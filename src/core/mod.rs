//! Catalog comparison engine
//!
//! Runs the pipeline strictly forward: the reconciler partitions the two
//! loaded tables, then the price diff and the formula synthesizer each read
//! the normalized tables to produce the remaining outputs.

pub mod formula;
pub mod price_diff;
pub mod reconciler;

pub use formula::{synthesize_export, Placement};
pub use price_diff::{detect_price_changes, find_column_containing, find_column_exact};
pub use reconciler::{reconcile, Reconciliation};

use crate::error::{SheetResult, TableSide};
use crate::layout::Layout;
use crate::loader::load_table;
use crate::types::{Comparison, Table};
use tracing::info;

/// Compare two already-normalized tables.
pub fn compare_tables(new: &Table, old: &Table, layout: &Layout) -> Comparison {
    let Reconciliation {
        to_add,
        to_delete,
        common,
    } = reconcile(new, old);
    let price_changes = detect_price_changes(new, old, layout);
    let (export, placement) = synthesize_export(new, layout);

    let comparison = Comparison {
        new_rows: new.row_count(),
        old_rows: old.row_count(),
        to_add,
        to_delete,
        common,
        price_changes,
        export,
        formula_columns: placement.positions(new.column_count()),
    };

    let summary = comparison.summary();
    info!(
        added = summary.added,
        deleted = summary.deleted,
        common = summary.common,
        price_changes = ?summary.price_changes,
        "comparison complete"
    );

    comparison
}

/// Parse both uploads and compare them. Either table failing to parse
/// aborts the run with no output.
pub fn compare_bytes(new: &[u8], old: &[u8], layout: &Layout) -> SheetResult<Comparison> {
    let new = load_table(new, TableSide::New, layout)?;
    let old = load_table(old, TableSide::Old, layout)?;
    Ok(compare_tables(&new, &old, layout))
}
