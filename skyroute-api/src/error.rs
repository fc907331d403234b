use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use skyroute_core::CoreError;

use crate::responses::ErrorResponse;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError { error: String, message: String },
    RouteNotFound { path: String, method: String },
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn station_not_found(iata: &str) -> Self {
        AppError::NotFoundError {
            error: "Station not found".to_string(),
            message: format!("No station found with IATA code: {}", iata),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Invalid query parameter").with_message(msg),
            ),
            AppError::NotFoundError { error, message } => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(error).with_message(message),
            ),
            AppError::RouteNotFound { path, method } => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Route not found".to_string(),
                    message: None,
                    path: Some(path),
                    method: Some(method),
                },
            ),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new("Internal Server Error"))
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new("Internal Server Error"))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}
