use crate::layout::Layout;
use crate::types::{PriceChange, Table};
use std::collections::HashMap;
use tracing::{debug, info};

/// First column whose lowercased name contains `needle` (case-insensitive).
pub fn find_column_containing(columns: &[String], needle: &str) -> Option<usize> {
    let needle = needle.to_lowercase();
    columns
        .iter()
        .position(|name| name.to_lowercase().contains(&needle))
}

/// First column named exactly `name`.
pub fn find_column_exact(columns: &[String], name: &str) -> Option<usize> {
    columns.iter().position(|c| c == name)
}

/// Products present in both tables whose price text differs.
///
/// Returns `None` when either table has no price-like column: the check
/// does not apply to that pair. Tables are inner-joined on column 0. Each
/// new row is paired with every old row sharing its ID (in old-table order),
/// so duplicated IDs produce one pair per combination. Prices are compared
/// as raw text, so `"10"` and `"10.00"` differ.
pub fn detect_price_changes(new: &Table, old: &Table, layout: &Layout) -> Option<Vec<PriceChange>> {
    let new_price = find_column_containing(new.columns(), &layout.price_needle);
    let old_price = find_column_containing(old.columns(), &layout.price_needle);

    let (new_price, old_price) = match (new_price, old_price) {
        (Some(n), Some(o)) => (n, o),
        _ => {
            info!(
                new_has_price = new_price.is_some(),
                old_has_price = old_price.is_some(),
                "no price-like column in both tables, skipping price comparison"
            );
            return None;
        }
    };

    debug!(
        new_column = %new.columns()[new_price],
        old_column = %old.columns()[old_price],
        "comparing prices"
    );

    let description = find_column_exact(new.columns(), &layout.preferred_description)
        .or_else(|| (new.column_count() > 1).then_some(1));

    let mut old_by_id: HashMap<&str, Vec<&[String]>> = HashMap::new();
    for row in old.rows() {
        old_by_id.entry(row[0].as_str()).or_default().push(row);
    }

    let mut changes = Vec::new();
    for row in new.rows() {
        let Some(matches) = old_by_id.get(row[0].as_str()) else {
            continue;
        };
        for old_row in matches {
            let new_value = &row[new_price];
            let old_value = &old_row[old_price];
            if new_value != old_value {
                changes.push(PriceChange {
                    id: row[0].clone(),
                    description: description.map(|i| row[i].clone()).unwrap_or_default(),
                    new_price: new_value.clone(),
                    old_price: old_value.clone(),
                });
            }
        }
    }

    Some(changes)
}
