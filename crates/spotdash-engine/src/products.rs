//! Per-product investment ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use spotdash_core::{parse_amount, sentinel, SpotRecord};

use crate::result::ProductEntry;

/// Product rankings are truncated to the top twenty entries.
pub const PRODUCT_LIMIT: usize = 20;

#[derive(Default)]
struct ProductTotals {
    brand: String,
    value: f64,
    public_value: f64,
}

/// Group rows by product, summing `value` and `public_value` per product,
/// and return the two independently ordered top-20 sequences.
///
/// Each entry carries the brand of the first row seen for that product;
/// conflicting brands across rows are not reconciled.
#[must_use]
pub fn top_products(rows: &[SpotRecord]) -> (Vec<ProductEntry>, Vec<ProductEntry>) {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(String, ProductTotals)> = Vec::new();

    for row in rows {
        let product = SpotRecord::text_or(&row.product, sentinel::PRODUCT);
        let idx = *index.entry(product).or_insert_with(|| {
            totals.push((
                product.to_string(),
                ProductTotals {
                    brand: SpotRecord::text_or(&row.brand, sentinel::BRAND).to_string(),
                    ..ProductTotals::default()
                },
            ));
            totals.len() - 1
        });
        totals[idx].1.value += parse_amount(row.value.as_deref());
        totals[idx].1.public_value += parse_amount(row.public_value.as_deref());
    }

    let by_value = ranked(&totals, |t| t.value);
    let by_public_value = ranked(&totals, |t| t.public_value);
    (by_value, by_public_value)
}

fn ranked<F>(totals: &[(String, ProductTotals)], amount: F) -> Vec<ProductEntry>
where
    F: Fn(&ProductTotals) -> f64,
{
    let mut entries: Vec<ProductEntry> = totals
        .iter()
        .map(|(product, t)| ProductEntry {
            product: product.clone(),
            brand: t.brand.clone(),
            amount: amount(t),
        })
        .collect();
    // Amounts are always finite (coercion never produces NaN), so the
    // Equal fallback only fires for genuine ties, where stable sort keeps
    // first-encounter order.
    entries.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
    entries.truncate(PRODUCT_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(product: &str, brand: &str, value: &str, public_value: &str) -> SpotRecord {
        SpotRecord {
            product: Some(product.to_string()),
            brand: Some(brand.to_string()),
            value: Some(value.to_string()),
            public_value: Some(public_value.to_string()),
            ..SpotRecord::default()
        }
    }

    #[test]
    fn sums_per_product_and_orders_by_each_metric() {
        let rows = vec![
            spot("P1", "X", "100", "1"),
            spot("P2", "X", "30", "500"),
            spot("P1", "X", "20", "1"),
        ];
        let (by_value, by_public) = top_products(&rows);

        assert_eq!(by_value[0].product, "P1");
        assert!((by_value[0].amount - 120.0).abs() < f64::EPSILON);
        assert_eq!(by_value[1].product, "P2");

        assert_eq!(by_public[0].product, "P2");
        assert!((by_public[0].amount - 500.0).abs() < f64::EPSILON);
        assert_eq!(by_public[1].product, "P1");
        assert!((by_public[1].amount - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn brand_is_first_seen_for_the_product() {
        let rows = vec![
            spot("P1", "First Brand", "10", "0"),
            spot("P1", "Other Brand", "90", "0"),
        ];
        let (by_value, _) = top_products(&rows);
        assert_eq!(by_value[0].brand, "First Brand");
    }

    #[test]
    fn missing_fields_use_sentinels() {
        let rows = vec![SpotRecord {
            value: Some("5".to_string()),
            ..SpotRecord::default()
        }];
        let (by_value, _) = top_products(&rows);
        assert_eq!(by_value[0].product, "Sin producto");
        assert_eq!(by_value[0].brand, "Sin marca");
    }

    #[test]
    fn truncates_to_twenty() {
        let rows: Vec<SpotRecord> = (0..30)
            .map(|i| spot(&format!("P{i}"), "X", &format!("{i}"), "0"))
            .collect();
        let (by_value, by_public) = top_products(&rows);
        assert_eq!(by_value.len(), PRODUCT_LIMIT);
        assert_eq!(by_public.len(), PRODUCT_LIMIT);
    }

    #[test]
    fn value_ties_keep_input_order() {
        let rows = vec![
            spot("Pz", "X", "10", "0"),
            spot("Pa", "X", "10", "0"),
            spot("Pm", "X", "10", "0"),
        ];
        let (by_value, _) = top_products(&rows);
        let names: Vec<&str> = by_value.iter().map(|e| e.product.as_str()).collect();
        assert_eq!(names, vec!["Pz", "Pa", "Pm"]);
    }
}
