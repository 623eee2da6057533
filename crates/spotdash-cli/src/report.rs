//! Plain-text rendering of aggregate results for the terminal.

use std::fmt::Write as _;

use spotdash_engine::AggregateResult;

/// Renders one aggregate as an indented text report.
#[must_use]
pub fn render(title: &str, spot_count: usize, result: &AggregateResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "  spots:             {spot_count}");
    let _ = writeln!(out, "  value total:       {}", result.metrics.total_value);
    let _ = writeln!(
        out,
        "  public value:      {}",
        result.metrics.total_public_value
    );
    let _ = writeln!(
        out,
        "  distinct supports: {}",
        result.metrics.distinct_support_count
    );

    if !result.ranked_agencies.is_empty() {
        let _ = writeln!(out, "  agencies:");
        for entry in &result.ranked_agencies {
            let _ = writeln!(out, "    {:<30} {}", entry.label, entry.count);
        }
    }
    if !result.ranked_supports.is_empty() {
        let _ = writeln!(out, "  supports:");
        for entry in &result.ranked_supports {
            let _ = writeln!(out, "    {:<30} {}", entry.label, entry.count);
        }
    }
    if !result.top_products_by_value.is_empty() {
        let _ = writeln!(out, "  top products by value:");
        for entry in &result.top_products_by_value {
            let _ = writeln!(
                out,
                "    {:<30} {:<20} {}",
                entry.product, entry.brand, entry.amount
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotdash_engine::{Metrics, RankEntry};

    #[test]
    fn render_includes_metrics_and_rankings() {
        let result = AggregateResult {
            metrics: Metrics {
                total_value: 150.0,
                total_public_value: 300.0,
                distinct_support_count: 2,
            },
            ranked_supports: vec![RankEntry {
                label: "Soporte A".to_string(),
                count: 3,
            }],
            ..AggregateResult::default()
        };
        let text = render("ACME", 3, &result);
        assert!(text.starts_with("ACME\n"));
        assert!(text.contains("spots:             3"));
        assert!(text.contains("value total:       150"));
        assert!(text.contains("Soporte A"));
    }

    #[test]
    fn render_omits_empty_sections() {
        let text = render("vacío", 0, &AggregateResult::default());
        assert!(!text.contains("agencies:"));
        assert!(!text.contains("top products"));
    }
}
