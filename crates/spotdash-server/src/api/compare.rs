use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use spotdash_engine::{aggregate, AggregateResult, RankingProfile};
use spotdash_export::{write_comparison, BrandReport, ExportFormat};

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Basket bounds: comparing one brand is meaningless, more than five is
/// unreadable.
const MIN_BRANDS: usize = 2;
const MAX_BRANDS: usize = 5;

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    #[serde(default)]
    brands: String,
    format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BrandComparisonData {
    pub brand: String,
    pub spot_count: usize,
    #[serde(flatten)]
    pub result: AggregateResult,
}

fn parse_basket(raw: &str, request_id: &str) -> Result<Vec<String>, ApiError> {
    let mut brands: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !brands.iter().any(|b| b == name) {
            brands.push(name.to_string());
        }
    }
    if brands.len() < MIN_BRANDS || brands.len() > MAX_BRANDS {
        return Err(ApiError::new(
            request_id,
            "validation_error",
            format!("brands must list between {MIN_BRANDS} and {MAX_BRANDS} distinct names"),
        ));
    }
    Ok(brands)
}

/// Fetches and aggregates every basket member concurrently. Fails fast:
/// one failed fetch fails the whole comparison, partial baskets are never
/// served.
async fn build_reports(
    state: &AppState,
    brands: Vec<String>,
    request_id: &str,
) -> Result<Vec<(String, usize, AggregateResult)>, ApiError> {
    let fetches = brands
        .iter()
        .map(|brand| spotdash_db::fetch_by_brand_substring(&state.pool, brand));
    let row_sets = futures::future::try_join_all(fetches)
        .await
        .map_err(|e| map_db_error(request_id.to_string(), &e))?;

    Ok(brands
        .into_iter()
        .zip(row_sets)
        .map(|(brand, rows)| {
            let result = aggregate(&rows, RankingProfile::BRAND_DETAIL);
            (brand, rows.len(), result)
        })
        .collect())
}

/// Side-by-side aggregates for a basket of brands.
pub async fn get_comparison(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CompareQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let brands = parse_basket(&query.brands, &req_id.0)?;
    let reports = build_reports(&state, brands, &req_id.0).await?;

    let data: Vec<BrandComparisonData> = reports
        .into_iter()
        .map(|(brand, spot_count, result)| BrandComparisonData {
            brand,
            spot_count,
            result,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// The same comparison rendered as a downloadable document.
pub async fn export_comparison(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<CompareQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let format: ExportFormat = query
        .format
        .as_deref()
        .unwrap_or("xlsx")
        .parse()
        .map_err(|_| {
            ApiError::new(
                req_id.0.clone(),
                "validation_error",
                "format must be 'xlsx' or 'pdf'",
            )
        })?;

    let brands = parse_basket(&query.brands, &req_id.0)?;
    let reports: Vec<BrandReport> = build_reports(&state, brands, &req_id.0)
        .await?
        .into_iter()
        .map(|(brand, _, result)| BrandReport { brand, result })
        .collect();

    let bytes = write_comparison(&reports, format).map_err(|e| {
        tracing::error!(error = %e, "comparison export failed");
        ApiError::new(req_id.0.clone(), "internal_error", "export rendering failed")
    })?;

    let disposition = format!(
        "attachment; filename=\"comparacion.{}\"",
        format.extension()
    );
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basket_trims_dedupes_and_keeps_order() {
        let brands = parse_basket(" uno , dos ,uno,, tres ", "req-1").unwrap();
        assert_eq!(brands, vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn basket_rejects_fewer_than_two() {
        assert!(parse_basket("uno", "req-1").is_err());
        assert!(parse_basket("", "req-1").is_err());
    }

    #[test]
    fn basket_rejects_more_than_five() {
        assert!(parse_basket("a,b,c,d,e,f", "req-1").is_err());
        assert!(parse_basket("a,b,c,d,e", "req-1").is_ok());
    }
}
