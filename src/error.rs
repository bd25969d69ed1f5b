use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// Uniform error body: every failure the API reports is `{"message": ...}`.
#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// One variant per failure class the API can report. Display text is the
/// exact user-facing message; internal detail never travels in it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Username sudah terdaftar")]
    UsernameTaken,
    // Unknown user and wrong password collapse into this one message so the
    // response never reveals which half was wrong.
    #[error("username atau password salah")]
    WrongCredentials,
    #[error("token tidak ditemukan")]
    MissingToken,
    #[error("token tidak valid atau expired")]
    InvalidToken,
    #[error("user tidak ditemukan")]
    UserNotFound,
    #[error("terjadi kesalahan pada server")]
    Internal,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UsernameTaken => StatusCode::CONFLICT,
            ApiError::WrongCredentials | ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
        })
    }
}
