//! The aggregation engine: pure folds from raw spot rows into the grouped
//! metrics the dashboard and exports are built from.
//!
//! Every operation here is synchronous and total over its input:
//! malformed rows degrade to defaults instead of failing. Output is
//! deterministic given input order: groups are kept in first-encounter
//! order and all sorts are stable, so equal ranking scores tie-break by
//! the order the fetch layer returned the rows.

mod aggregate;
mod metrics;
mod multimedia;
mod products;
mod ranking;
mod result;

pub use aggregate::aggregate;
pub use metrics::sum_metrics;
pub use multimedia::multimedia_rows;
pub use products::{top_products, PRODUCT_LIMIT};
pub use ranking::{rank_by_distinct_field, rank_by_row_count, RANKING_LIMIT};
pub use result::{
    AggregateResult, AgencyGrouping, Metrics, MultimediaRow, ProductEntry, RankEntry,
    RankingProfile, SupportGrouping,
};
