use crate::table::AggregateTable;

/// Fold all per-worker tables into one. Runs single-threaded, strictly
/// after every worker has been joined; merge order does not affect the
/// result, so plain iteration order is fine.
pub fn reduce(tables: Vec<AggregateTable>) -> AggregateTable {
    let mut tables = tables.into_iter();
    let mut merged = tables.next().unwrap_or_default();
    for table in tables {
        merged.merge_from(table);
    }
    merged
}
