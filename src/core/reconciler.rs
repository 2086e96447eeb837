use crate::types::Table;
use std::collections::HashSet;
use tracing::debug;

/// Partition of two catalogs by product ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Rows of the new table whose ID is absent from the old table.
    pub to_add: Table,
    /// Rows of the old table whose ID is absent from the new table.
    pub to_delete: Table,
    /// Rows of the new table whose ID appears in both.
    pub common: Table,
}

/// Split `new` and `old` into added, deleted and common rows.
///
/// Membership is decided per ID, so a duplicated ID lands every one of its
/// rows in the same partition. Row order of the source table is kept and
/// neither input is modified.
pub fn reconcile(new: &Table, old: &Table) -> Reconciliation {
    let new_ids: HashSet<&str> = new.ids().collect();
    let old_ids: HashSet<&str> = old.ids().collect();

    let to_add = new.filter_by_id(|id| !old_ids.contains(id));
    let to_delete = old.filter_by_id(|id| !new_ids.contains(id));
    let common = new.filter_by_id(|id| old_ids.contains(id));

    debug!(
        added = to_add.row_count(),
        deleted = to_delete.row_count(),
        common = common.row_count(),
        "reconciled catalogs"
    );

    Reconciliation {
        to_add,
        to_delete,
        common,
    }
}
