//! Output types of the aggregation engine.

use serde::Serialize;

/// The three scalar metrics shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub total_value: f64,
    pub total_public_value: f64,
    pub distinct_support_count: usize,
}

/// One entry of a top-N ranking: a grouping key and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    pub label: String,
    pub count: usize,
}

/// One entry of a top-N product ranking.
///
/// `brand` is the brand of whichever row for this product was encountered
/// first; rows for the same product with conflicting brands are not
/// reconciled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductEntry {
    pub product: String,
    pub brand: String,
    pub amount: f64,
}

/// A spot row normalized for the multimedia table: every field defined,
/// never absent, since the presentation reads all of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultimediaRow {
    pub media_agency: String,
    pub creative_agency: String,
    pub uuid: String,
    pub date: String,
    pub ad_first_appearance: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
    pub duration: String,
    pub value: f64,
    pub quality: String,
    pub category: String,
    pub industry: String,
    pub support: String,
}

/// Which field agencies are grouped by, and how each group is scored.
///
/// Both variants exist in the product today: the brand-detail view groups
/// by `media_agency` and scores by distinct supports, the dashboard view
/// groups by `media` and scores by row count. Which of the two was the
/// intended behavior is an open question; neither is silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgencyGrouping {
    /// Group by `media_agency`, score by the distinct `support` set size.
    MediaAgencyByDistinctSupport,
    /// Group by `media`, score by row count.
    MediaByRowCount,
}

/// How supports are scored: row occurrences or distinct products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportGrouping {
    RowCount,
    DistinctProducts,
}

/// The pair of grouping choices a call site selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingProfile {
    pub agencies: AgencyGrouping,
    pub supports: SupportGrouping,
}

impl RankingProfile {
    /// The groupings used by the per-brand detail view.
    pub const BRAND_DETAIL: Self = Self {
        agencies: AgencyGrouping::MediaAgencyByDistinctSupport,
        supports: SupportGrouping::RowCount,
    };

    /// The groupings used by the date-filtered dashboard view.
    pub const DASHBOARD: Self = Self {
        agencies: AgencyGrouping::MediaByRowCount,
        supports: SupportGrouping::DistinctProducts,
    };
}

/// Everything derived from one fetch, replaced wholesale on the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub metrics: Metrics,
    pub ranked_agencies: Vec<RankEntry>,
    pub ranked_supports: Vec<RankEntry>,
    pub top_products_by_value: Vec<ProductEntry>,
    pub top_products_by_public_value: Vec<ProductEntry>,
    pub multimedia_rows: Vec<MultimediaRow>,
}
