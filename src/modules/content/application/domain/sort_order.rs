use uuid::Uuid;

use super::entities::RankedRow;

/// First rank written by a reorder.
pub const REORDER_BASE: i32 = 0;

/// First rank written by an import, for top-level rows and children alike.
pub const IMPORT_BASE: i32 = 1;

/// Highest rank in a collection, 0 when it is empty.
pub fn max_rank(ranks: impl IntoIterator<Item = i32>) -> i32 {
    ranks.into_iter().max().unwrap_or(0)
}

/// Rank for a single item appended outside of import/reorder.
pub fn next_append_rank(current_max_rank: i32) -> i32 {
    current_max_rank + 1
}

/// `[base, base + 1, ..., base + n - 1]`
pub fn sequential_ranks(n: usize, base: i32) -> Vec<i32> {
    (0..n).map(|offset| base + offset as i32).collect()
}

/// Pair each id with its position-derived rank, preserving caller order.
pub fn assign_ranks(ordered_ids: &[Uuid], base: i32) -> Vec<RankedRow> {
    ordered_ids
        .iter()
        .zip(sequential_ranks(ordered_ids.len(), base))
        .map(|(id, sort_order)| RankedRow {
            id: *id,
            sort_order,
        })
        .collect()
}
