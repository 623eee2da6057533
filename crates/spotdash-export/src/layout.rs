//! Shared tabular layout for a brand report.
//!
//! Both document writers walk the same row grid, so the XLSX sheet and
//! the PDF page always present the same numbers in the same order.

use crate::BrandReport;

/// One cell of the report grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }
}

/// The full row grid for one brand: metrics block, media-agency ranking,
/// then support ranking, separated by blank rows.
#[must_use]
pub fn report_rows(report: &BrandReport) -> Vec<Vec<Cell>> {
    let mut rows = vec![
        vec![Cell::text("Marca:"), Cell::text(&report.brand)],
        vec![],
        vec![Cell::text("Métricas")],
        vec![
            Cell::text("Value total"),
            Cell::Number(report.result.metrics.total_value),
        ],
        vec![
            Cell::text("Public value total"),
            Cell::Number(report.result.metrics.total_public_value),
        ],
        vec![
            Cell::text("Soportes distintos"),
            Cell::Number(as_f64(report.result.metrics.distinct_support_count)),
        ],
        vec![],
        vec![Cell::text("Agencias de medios")],
        vec![Cell::text("Agencia"), Cell::text("Cantidad")],
    ];
    for entry in &report.result.ranked_agencies {
        rows.push(vec![
            Cell::text(&entry.label),
            Cell::Number(as_f64(entry.count)),
        ]);
    }
    rows.push(vec![]);
    rows.push(vec![Cell::text("Soportes")]);
    rows.push(vec![Cell::text("Soporte"), Cell::text("Cantidad")]);
    for entry in &report.result.ranked_supports {
        rows.push(vec![
            Cell::text(&entry.label),
            Cell::Number(as_f64(entry.count)),
        ]);
    }
    rows
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(count: usize) -> f64 {
    count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotdash_engine::{AggregateResult, Metrics, RankEntry};

    fn sample_report() -> BrandReport {
        BrandReport {
            brand: "ACME".to_string(),
            result: AggregateResult {
                metrics: Metrics {
                    total_value: 150.0,
                    total_public_value: 300.0,
                    distinct_support_count: 2,
                },
                ranked_agencies: vec![RankEntry {
                    label: "M1".to_string(),
                    count: 2,
                }],
                ranked_supports: vec![
                    RankEntry {
                        label: "A".to_string(),
                        count: 2,
                    },
                    RankEntry {
                        label: "B".to_string(),
                        count: 1,
                    },
                ],
                ..AggregateResult::default()
            },
        }
    }

    #[test]
    fn grid_opens_with_brand_and_metrics() {
        let rows = report_rows(&sample_report());
        assert_eq!(
            rows[0],
            vec![Cell::text("Marca:"), Cell::text("ACME")]
        );
        assert_eq!(
            rows[3],
            vec![Cell::text("Value total"), Cell::Number(150.0)]
        );
        assert_eq!(
            rows[5],
            vec![Cell::text("Soportes distintos"), Cell::Number(2.0)]
        );
    }

    #[test]
    fn grid_lists_every_ranking_entry() {
        let rows = report_rows(&sample_report());
        let flat: Vec<&Cell> = rows.iter().flatten().collect();
        let labels: Vec<&str> = flat
            .iter()
            .filter_map(|c| match c {
                Cell::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"M1"));
        assert!(labels.contains(&"A"));
        assert!(labels.contains(&"B"));
    }
}
