use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::views;

#[derive(Debug)]
pub enum AppError {
    /// Something on our side failed; the message is shown to the user,
    /// the cause has already been logged.
    Internal(&'static str),
    /// The client sent something we refuse to act on.
    Input(&'static str),
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found"),
        };

        (code, error_page(message)).into_response()
    }
}

fn error_page(message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (message) }
            p { a href="/" { "Back to the cover page" } }
        },
    )
}

/// Maps any displayable error into `AppError::Internal`, logging the cause.
pub trait ResultExt<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }
}

impl<T> ResultExt<T> for Option<T> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.ok_or_else(|| {
            tracing::error!("{msg}");
            AppError::Internal(msg)
        })
    }
}
