//! Composition of the individual folds into one [`AggregateResult`].

use spotdash_core::{sentinel, SpotRecord};

use crate::metrics::sum_metrics;
use crate::multimedia::multimedia_rows;
use crate::products::top_products;
use crate::ranking::{rank_by_distinct_field, rank_by_row_count};
use crate::result::{AggregateResult, AgencyGrouping, RankingProfile, SupportGrouping};

/// Fold a fetched row set into the full set of derived views.
///
/// Total over any input, including empty; deterministic given input order.
/// The `profile` selects which of the two coexisting grouping conventions
/// to apply (see [`RankingProfile`]).
#[must_use]
pub fn aggregate(rows: &[SpotRecord], profile: RankingProfile) -> AggregateResult {
    let ranked_agencies = match profile.agencies {
        AgencyGrouping::MediaAgencyByDistinctSupport => {
            rank_by_distinct_field(rows, media_agency, support)
        }
        AgencyGrouping::MediaByRowCount => rank_by_row_count(rows, media),
    };

    let ranked_supports = match profile.supports {
        SupportGrouping::RowCount => rank_by_row_count(rows, support),
        SupportGrouping::DistinctProducts => rank_by_distinct_field(rows, support, product),
    };

    let (top_products_by_value, top_products_by_public_value) = top_products(rows);

    AggregateResult {
        metrics: sum_metrics(rows),
        ranked_agencies,
        ranked_supports,
        top_products_by_value,
        top_products_by_public_value,
        multimedia_rows: multimedia_rows(rows),
    }
}

fn support(row: &SpotRecord) -> &str {
    SpotRecord::text_or(&row.support, sentinel::SUPPORT)
}

fn product(row: &SpotRecord) -> &str {
    SpotRecord::text_or(&row.product, sentinel::PRODUCT)
}

fn media(row: &SpotRecord) -> &str {
    SpotRecord::text_or(&row.media, sentinel::MEDIA)
}

fn media_agency(row: &SpotRecord) -> &str {
    SpotRecord::text_or(&row.media_agency, sentinel::MEDIA_AGENCY)
}
