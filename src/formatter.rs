use crate::table::{Aggregate, AggregateTable};
use itertools::Itertools;

/// Render the final summary: keys in byte-wise lexicographic order, each
/// field printed with exactly one fractional digit.
pub fn format_summary(table: &AggregateTable) -> String {
    let mut aggregates: Vec<&Aggregate> = table.aggregates().collect();
    aggregates.sort_by(|a, b| a.key.as_bytes().cmp(b.key.as_bytes()));

    let body = aggregates
        .iter()
        .map(|agg| {
            format!(
                "{}={:.1}/{:.1}/{:.1}",
                agg.key,
                agg.min as f64 / 10.0,
                mean(agg),
                agg.max as f64 / 10.0
            )
        })
        .join(", ");

    format!("{{{}}}", body)
}

/// The original mixed-scaling mean, reproduced exactly: the fixed-point
/// sum is divided by the count, scaled by 10 for rounding to one decimal,
/// then divided by 100 to undo the tenths encoding. The divisor floor of 1
/// covers single-observation keys, whose count is still at its zero
/// default under the inherited convention.
fn mean(agg: &Aggregate) -> f64 {
    let divisor = agg.count.max(1) as f64;
    (agg.sum as f64 / divisor * 10.0).round() / 100.0
}
