use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    /// Upstream answered with a non-success status.
    #[error("{0}")]
    Upstream(String),

    #[error("Empty reply from upstream")]
    EmptyReply,

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_)
            | AppError::EmptyReply
            | AppError::Transport(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!("{message}");
        } else {
            tracing::debug!("Rejected request: {message}");
        }

        // Plain text body, callers surface it as-is
        (status, message).into_response()
    }
}
