//! sheetcmp - product sheet comparator
//!
//! Compares a "new" and an "old" product table keyed by the product ID in
//! column A and reports:
//!
//! - products to add (only in the new table)
//! - products to delete (only in the old table)
//! - price changes (in both, price text differs)
//! - an output table: the new table with `=L2.url` / `=M2.url` style
//!   formulas placed in columns N/O
//!
//! # Example
//!
//! ```
//! use sheetcmp::core::compare_bytes;
//! use sheetcmp::layout::Layout;
//!
//! let new = b"id,name,Price\nA,Alpha,10\nB,Beta,4\n";
//! let old = b"id,name,Price\nA,Alpha,12\n";
//!
//! let comparison = compare_bytes(new, old, &Layout::default())?;
//! assert_eq!(comparison.add_list()[0].id, "B");
//! assert_eq!(comparison.price_change_list()[0].old_price, "12");
//! assert_eq!(comparison.export.cell(0, 3), Some("=L2.url"));
//! # Ok::<(), sheetcmp::error::SheetError>(())
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod layout;
pub mod loader;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{SheetError, SheetResult, TableSide};
pub use layout::Layout;
pub use types::{Comparison, ComparisonSummary, ListingEntry, PriceChange, Table};
