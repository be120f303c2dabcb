use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::{DomainError, Rejection};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Rejected: {0}")]
    Rejected(Rejection),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => AppError::NotFound,
            DomainError::Rejected(r) => AppError::Rejected(r),
            DomainError::MalformedDateTime(s) => {
                AppError::BadRequest(format!("malformed date-time '{}'", s))
            }
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::NotFound => HttpResponse::build(status).json(serde_json::json!({
                "error": self.to_string()
            })),
            AppError::Rejected(r) => HttpResponse::build(status).json(serde_json::json!({
                "error": r.message(),
                "code": r.code()
            })),
            AppError::BadRequest(msg) => HttpResponse::build(status).json(serde_json::json!({
                "error": msg
            })),
            AppError::Internal(msg) => {
                log::error!("internal error: {}", msg);
                HttpResponse::build(status).json(serde_json::json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn not_found_returns_404() {
        let resp = AppError::NotFound.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rejection_returns_422() {
        let resp = AppError::Rejected(Rejection::Conflict).error_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn internal_error_returns_500() {
        let err = AppError::Internal("something went wrong".to_string());
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn rejection_display_uses_reason() {
        assert_eq!(
            AppError::Rejected(Rejection::EndNotAfterStart).to_string(),
            "Rejected: end must be later than start"
        );
    }

    #[test]
    fn domain_not_found_maps_to_app_not_found() {
        let app_err: AppError = DomainError::NotFound.into();
        assert!(matches!(app_err, AppError::NotFound));
    }

    #[test]
    fn domain_rejection_keeps_its_reason() {
        let app_err: AppError = DomainError::Rejected(Rejection::ExceedsTicketPrice).into();
        assert!(matches!(
            app_err,
            AppError::Rejected(Rejection::ExceedsTicketPrice)
        ));
    }

    #[test]
    fn malformed_date_time_maps_to_bad_request() {
        let app_err: AppError = DomainError::MalformedDateTime("2024/01/01".to_string()).into();
        assert_eq!(app_err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn domain_internal_maps_to_app_internal() {
        let app_err: AppError = DomainError::Internal("oops".to_string()).into();
        assert!(matches!(app_err, AppError::Internal(_)));
    }
}
