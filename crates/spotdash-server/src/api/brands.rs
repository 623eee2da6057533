use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use spotdash_engine::{aggregate, AggregateResult, RankingProfile};

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

/// Queries shorter than this return no suggestions and hit no index.
const SUGGEST_MIN_CHARS: usize = 2;
const SUGGEST_LIMIT: i64 = 8;

#[derive(Debug, Serialize)]
pub struct BrandDetailData {
    pub brand: String,
    pub spot_count: usize,
    #[serde(flatten)]
    pub result: AggregateResult,
}

/// Full per-brand aggregate for every spot whose brand contains `name`.
pub async fn get_brand_detail(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = spotdash_db::fetch_by_brand_substring(&state.pool, &name)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    if rows.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no spots found for brand '{name}'"),
        ));
    }

    let result = aggregate(&rows, RankingProfile::BRAND_DETAIL);
    Ok(Json(ApiResponse {
        data: BrandDetailData {
            brand: name,
            spot_count: rows.len(),
            result,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    q: String,
}

/// Autocomplete for the brand search box. Below the minimum length the
/// response is an empty list and the database is not queried at all.
pub async fn suggest_brands(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SuggestQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let trimmed = query.q.trim();
    if trimmed.chars().count() < SUGGEST_MIN_CHARS {
        return Ok(Json(ApiResponse {
            data: Vec::<String>::new(),
            meta: ResponseMeta::new(req_id.0),
        }));
    }

    let brands = spotdash_db::suggest_brands(&state.pool, trimmed, SUGGEST_LIMIT)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: brands,
        meta: ResponseMeta::new(req_id.0),
    }))
}
