use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("{0}")]
    UnauthenticatedError(String),

    #[error("{0}")]
    ForbiddenError(String),

    #[error("{0}")]
    BadRequestError(String),

    #[error("{0}")]
    InternalServerError(String),
}

impl CustomError {
    /// Missing or invalid `token` cookie.
    pub fn unauthorized() -> Self {
        CustomError::UnauthenticatedError("unauthorized".to_string())
    }

    /// Query value does not match the token payload.
    pub fn forbidden() -> Self {
        CustomError::ForbiddenError("forbidden access".to_string())
    }
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::UnauthenticatedError(..) => StatusCode::UNAUTHORIZED,
            CustomError::ForbiddenError(..) => StatusCode::FORBIDDEN,
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_message = json!({
            "success": false,
            "message": self.to_string(),
            "httpStatusCode": self.status_code().as_u16(),
            "error": match *self {
                CustomError::UnauthenticatedError(..) => "UNAUTHENTICATED_ERROR",
                CustomError::ForbiddenError(..) => "FORBIDDEN_ERROR",
                CustomError::BadRequestError(..) => "BAD_REQUEST_ERROR",
                CustomError::InternalServerError(..) => "INTERNAL_SERVER_ERROR",
            },
            "service": std::env::var("SERVICE_NAME").unwrap_or_else(|_| "Unknown".to_string()),
        });

        HttpResponse::build(self.status_code()).json(error_message)
    }
}
