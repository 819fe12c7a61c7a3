use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;

use crate::application::services::{EXPORT_FILE_NAME, render_standalone_document};
use crate::domain::AnalysisResult;

pub async fn export_handler(Json(result): Json<AnalysisResult>) -> impl IntoResponse {
    let document = render_standalone_document(&result);

    tracing::debug!(
        language = %result.metadata.language,
        bytes = document.len(),
        "Rendered standalone document"
    );

    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        document,
    )
}
