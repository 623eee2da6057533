use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Serialize;
use spotdash_docqa::{extract_text, render_lightweight_markup, DocQaError};

use super::{ApiError, ApiResponse, AppState, ResponseMeta};
use crate::middleware::RequestId;

#[derive(Debug, Serialize)]
pub struct AnswerData {
    pub answer: String,
    pub answer_html: String,
}

/// Answers a question about an uploaded PDF.
///
/// Multipart fields: `file` holds the PDF bytes, `question` the user's
/// question. Text extraction happens here; only extracted text leaves the
/// server.
pub async fn ask_document(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut file: Option<Vec<u8>> = None;
    let mut question: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::new(
            req_id.0.clone(),
            "bad_request",
            format!("malformed multipart body: {e}"),
        )
    })? {
        match field.name() {
            Some("file") => {
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::new(
                        req_id.0.clone(),
                        "bad_request",
                        format!("file upload failed: {e}"),
                    )
                })?;
                file = Some(bytes.to_vec());
            }
            Some("question") => {
                let text = field.text().await.map_err(|e| {
                    ApiError::new(
                        req_id.0.clone(),
                        "bad_request",
                        format!("question field unreadable: {e}"),
                    )
                })?;
                question = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| {
        ApiError::new(req_id.0.clone(), "validation_error", "missing 'file' field")
    })?;
    let question = question
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "validation_error",
                "missing 'question' field",
            )
        })?;

    let document_text = extract_text(&file).map_err(|e| {
        tracing::warn!(error = %e, "document text extraction failed");
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            "the uploaded file is not a readable PDF",
        )
    })?;

    let answer = state
        .answers
        .ask(&document_text, &question)
        .await
        .map_err(|e| match e {
            DocQaError::EmptyAnswer => ApiError::new(
                req_id.0.clone(),
                "upstream_error",
                "the answers API returned no answer",
            ),
            other => {
                tracing::error!(error = %other, "answers API request failed");
                ApiError::new(
                    req_id.0.clone(),
                    "upstream_error",
                    "the answers API is unavailable",
                )
            }
        })?;

    let answer_html = render_lightweight_markup(&answer);
    Ok(Json(ApiResponse {
        data: AnswerData {
            answer,
            answer_html,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
