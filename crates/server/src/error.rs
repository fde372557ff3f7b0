use crate::dtos::message::ErrorResponse;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::ServiceError;
use log::error;
use models::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidValue { name: &'static str, value: String },
}

/// Top-level error type for handlers and startup
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Malformed ids, blank names
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body that could not be read as the expected JSON
    #[error(transparent)]
    Body(#[from] JsonRejection),

    /// Path segment that could not be decoded
    #[error(transparent)]
    Path(#[from] PathRejection),

    /// Query string that does not fit the expected parameters
    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Body(rejection) => rejection.status(),
            Self::Path(rejection) => rejection.status(),
            Self::Query(rejection) => rejection.status(),
            Self::Service(ServiceError::StudentNotFound | ServiceError::CourseNotFound) => {
                StatusCode::NOT_FOUND
            }
            Self::Service(ServiceError::MissingStudent(_)) => StatusCode::BAD_REQUEST,
            Self::Service(ServiceError::Db(_)) | Self::Db(_) | Self::Config(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Client errors carry their message; server errors are logged and masked
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let detail = match &self {
            Self::Body(rejection) => rejection.body_text(),
            Self::Path(rejection) => rejection.body_text(),
            Self::Query(rejection) => rejection.body_text(),
            _ if status.is_server_error() => {
                error!("{self}");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
