use crate::layout::Layout;
use crate::types::Table;
use tracing::debug;

/// Where the synthesized formula columns ended up in the export table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Existing columns at these positions were overwritten.
    Replaced([usize; 2]),
    /// Two trailing columns were added.
    Appended,
}

impl Placement {
    /// Export positions of the formula columns for a source table
    /// `source_width` columns wide.
    pub fn positions(&self, source_width: usize) -> [usize; 2] {
        match self {
            Placement::Replaced(positions) => *positions,
            Placement::Appended => [source_width, source_width + 1],
        }
    }
}

/// Reference formula for a zero-based data row, e.g. `=L2.url` for row 0.
pub fn reference_formula(letter: &str, row_index: usize, layout: &Layout) -> String {
    format!(
        "={}{}{}",
        letter,
        row_index + layout.header_offset,
        layout.formula_suffix
    )
}

/// One formula per data row referencing `letter`.
pub fn formula_column(letter: &str, rows: usize, layout: &Layout) -> Vec<String> {
    (0..rows)
        .map(|i| reference_formula(letter, i, layout))
        .collect()
}

/// Build the export table: `new` with the two formula columns placed.
///
/// A table at least `column_threshold` wide gets the target positions
/// overwritten in place, discarding what was there. A narrower table gets
/// two trailing columns named after `appended_names`.
pub fn synthesize_export(new: &Table, layout: &Layout) -> (Table, Placement) {
    let rows = new.row_count();
    let [first_letter, second_letter] = &layout.reference_letters;
    let first = formula_column(first_letter, rows, layout);
    let second = formula_column(second_letter, rows, layout);

    let mut export = new.clone();
    let placement = if export.column_count() >= layout.column_threshold {
        let [a, b] = layout.target_positions;
        export.replace_column(a, first);
        export.replace_column(b, second);
        Placement::Replaced(layout.target_positions)
    } else {
        export.append_column(&layout.appended_names[0], first);
        export.append_column(&layout.appended_names[1], second);
        Placement::Appended
    };

    match placement {
        Placement::Replaced(positions) => debug!(
            ?positions,
            rows,
            "formulas overwrite existing columns"
        ),
        Placement::Appended => debug!(
            width = new.column_count(),
            rows,
            "table narrower than threshold, formulas appended"
        ),
    }

    (export, placement)
}
