use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Plain-text success body.
pub struct ApiSuccess(pub String, pub StatusCode);

impl IntoResponse for ApiSuccess {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        (status, message).into_response()
    }
}

/// Plain-text error body.
pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (message, status) = (self.0, self.1);
        (status, message).into_response()
    }
}
