//! The raw advertising-spot record and the coercion rules applied to it.

use serde::{Deserialize, Serialize};

/// Sentinel labels for missing categorical fields.
///
/// The upstream feed is Chilean and so are its labels; grouping keys must
/// always be defined, so absent or blank fields land in these buckets.
pub mod sentinel {
    pub const SUPPORT: &str = "Sin soporte";
    pub const MEDIA: &str = "Sin medio";
    pub const MEDIA_AGENCY: &str = "Sin agencia";
    pub const CREATIVE_AGENCY: &str = "Sin agencia creativa";
    pub const PRODUCT: &str = "Sin producto";
    pub const BRAND: &str = "Sin marca";
}

/// One advertising occurrence (a single ad airing/placement) as fetched.
///
/// Every field is optional: the import pipeline takes whatever the feed
/// produced and defers all coercion to the aggregation engine. `value` and
/// `public_value` arrive as text and are parsed with [`parse_amount`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpotRecord {
    pub product: Option<String>,
    pub brand: Option<String>,
    pub media: Option<String>,
    pub support: Option<String>,
    pub media_agency: Option<String>,
    pub creative_agency: Option<String>,
    pub uuid: Option<String>,
    pub date: Option<String>,
    pub ad_first_appearance: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
    pub duration: Option<String>,
    pub value: Option<String>,
    pub public_value: Option<String>,
    pub quality: Option<String>,
    pub category: Option<String>,
    pub industry: Option<String>,
}

impl SpotRecord {
    /// The categorical field value, or `fallback` when absent or blank.
    ///
    /// Blank strings count as absent so that grouping keys never end up
    /// empty.
    #[must_use]
    pub fn text_or<'a>(field: &'a Option<String>, fallback: &'a str) -> &'a str {
        match field.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => fallback,
        }
    }

    /// Whether this record carries a multimedia reference.
    #[must_use]
    pub fn has_multimedia(&self) -> bool {
        self.uuid.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

/// Parse a financial field to a number, coercing anything unparseable to 0.
///
/// Missing, blank, non-numeric, and non-finite values all become `0.0`.
/// This keeps aggregation total: a malformed row degrades, it never fails.
#[must_use]
pub fn parse_amount(field: Option<&str>) -> f64 {
    let Some(raw) = field else { return 0.0 };
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}
