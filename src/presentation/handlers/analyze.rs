use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use crate::domain::{AnalysisRequest, AnalysisRequestError, AnalysisResult};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[tracing::instrument(skip_all)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    if request.is_blank() {
        return Err(ApiError::bad_request("Content must not be empty"));
    }

    if let AnalysisRequest::Text { content } = &request {
        tracing::debug!(content = %sanitize_for_log(content), "Text analysis requested");
    }

    let result = state.gateway.analyze(&request).await?;
    Ok(Json(result))
}

#[tracing::instrument(skip_all)]
pub async fn analyze_upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read multipart: {e}")))?
        .ok_or_else(|| ApiError::bad_request("No file uploaded"))?;

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed to read file: {e}")))?;

    tracing::debug!(
        filename = %filename,
        content_type = %content_type,
        bytes = data.len(),
        "File upload received"
    );

    if data.is_empty() {
        return Err(ApiError::bad_request("Uploaded file is empty"));
    }

    let request = AnalysisRequest::from_bytes(&content_type, &data).map_err(|e| match e {
        AnalysisRequestError::UnsupportedContentType(_) => {
            ApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, e.to_string())
        }
        AnalysisRequestError::InvalidText => ApiError::bad_request(e.to_string()),
    })?;

    if request.is_blank() {
        return Err(ApiError::bad_request("Uploaded file has no content"));
    }

    let result = state.gateway.analyze(&request).await?;
    Ok(Json(result))
}
