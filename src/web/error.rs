//! Web Error Types
//!
//! Errors that abort a page before it can render its own state, turned
//! into an HTML error page with the matching status code.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use super::views;

#[derive(Error, Debug)]
pub enum WebError {
    /// Malformed request input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// No such page
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WebError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            WebError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            WebError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            WebError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            WebError::Io(_) => (StatusCode::INTERNAL_SERVER_ERROR, "IO_ERROR"),
        }
    }

    /// Message safe to show to visitors
    fn public_message(&self) -> &'static str {
        match self {
            WebError::BadRequest(_) => "La solicitud no es válida.",
            WebError::NotFound(_) => "La página solicitada no existe.",
            WebError::Internal(_) | WebError::Io(_) => "Ocurrió un error inesperado.",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Web error occurred"
            );
        } else {
            tracing::info!(
                request_id = %request_id,
                error_code = %code,
                error_message = %self,
                "Request rejected"
            );
        }

        let body = views::error::render(status.as_u16(), self.public_message(), request_id);
        (status, Html(body)).into_response()
    }
}

/// Result type for page handlers
pub type WebResult<T> = Result<T, WebError>;
