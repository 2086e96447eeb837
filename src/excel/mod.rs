//! Excel output: column letters and the `.xlsx` comparison report

mod columns;
mod report;

pub use columns::{column_index_to_letter, formula_column_letters};
pub use report::ReportExporter;
