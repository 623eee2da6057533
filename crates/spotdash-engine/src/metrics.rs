//! Scalar metrics: value totals and distinct-support cardinality.

use std::collections::HashSet;

use spotdash_core::{parse_amount, sentinel, SpotRecord};

use crate::result::Metrics;

/// Single pass over the rows summing both financial fields and counting
/// distinct supports.
///
/// Non-numeric or missing amounts contribute 0. Rows without a support
/// fall into the sentinel bucket, which counts as one distinct support.
#[must_use]
pub fn sum_metrics(rows: &[SpotRecord]) -> Metrics {
    let mut total_value = 0.0;
    let mut total_public_value = 0.0;
    let mut supports: HashSet<&str> = HashSet::new();

    for row in rows {
        total_value += parse_amount(row.value.as_deref());
        total_public_value += parse_amount(row.public_value.as_deref());
        supports.insert(SpotRecord::text_or(&row.support, sentinel::SUPPORT));
    }

    Metrics {
        total_value,
        total_public_value,
        distinct_support_count: supports.len(),
    }
}
