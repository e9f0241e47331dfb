use super::dto::ProcessVideoRequest;
use super::service::VideoService;
use crate::common::response::{ApiError, ApiSuccess};
use crate::modules::pipeline::error::PipelineError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{error, info};

/// Transcode a local file to 360p
#[utoipa::path(
    post,
    path = "/process-video",
    request_body = ProcessVideoRequest,
    responses(
        (status = 200, description = "Processing finished successfully", body = String, content_type = "text/plain"),
        (status = 400, description = "A required path is missing", body = String, content_type = "text/plain"),
        (status = 500, description = "The encoder failed", body = String, content_type = "text/plain")
    ),
    tag = "Video"
)]
pub async fn process_video(
    State(state): State<AppState>,
    payload: Result<Json<ProcessVideoRequest>, JsonRejection>,
) -> impl IntoResponse {
    info!("Processing video ...");

    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return ApiError(rejection.body_text(), StatusCode::BAD_REQUEST).into_response(),
    };

    match VideoService::process(state, req).await {
        Ok(()) => ApiSuccess(
            "Processing finished successfully".to_string(),
            StatusCode::OK,
        )
        .into_response(),
        Err(PipelineError::Client(e)) => ApiError(e.to_string(), StatusCode::BAD_REQUEST).into_response(),
        Err(e) => {
            error!("An error occurred: {}", e);
            ApiError(format!("An error occurred: {}", e), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}
