use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Serialize;
use spotdash_media::MediaKind;

use super::{ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub struct MediaKindData {
    pub uuid: String,
    pub kind: MediaKind,
}

/// Classifies a spot's multimedia asset. Always 200: an unreachable or
/// unrecognizable asset reports `unknown`, not an error.
pub async fn get_media_kind(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(uuid): Path<String>,
) -> impl IntoResponse {
    let kind = state.media.classify(&uuid).await;
    Json(ApiResponse {
        data: MediaKindData { uuid, kind },
        meta: ResponseMeta::new(req_id.0),
    })
}
