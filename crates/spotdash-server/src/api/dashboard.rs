use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use spotdash_core::SpotRecord;
use spotdash_engine::{aggregate, RankingProfile};

use super::{map_db_error, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Aggregated view of the whole table, or of an inclusive date range when
/// both bounds are present. A half-open range falls back to the full scan
/// rather than guessing the missing bound.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, super::ApiError> {
    let rows = fetch_rows(&state, &query)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let result = aggregate(&rows, RankingProfile::DASHBOARD);
    Ok(Json(ApiResponse {
        data: result,
        meta: ResponseMeta::new(req_id.0),
    }))
}

async fn fetch_rows(
    state: &AppState,
    query: &DashboardQuery,
) -> Result<Vec<SpotRecord>, spotdash_db::DbError> {
    let bounds = query
        .start_date
        .as_deref()
        .filter(|s| !s.is_empty())
        .zip(query.end_date.as_deref().filter(|s| !s.is_empty()));
    match bounds {
        Some((start, end)) => spotdash_db::fetch_by_date_range(&state.pool, start, end).await,
        None => spotdash_db::fetch_all(&state.pool).await,
    }
}

/// Distinct dates for the configured year, ascending, for the date picker.
pub async fn list_dates(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<impl IntoResponse, super::ApiError> {
    let dates = spotdash_db::fetch_distinct_dates(&state.pool, &state.date_year_prefix)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: dates,
        meta: ResponseMeta::new(req_id.0),
    }))
}
