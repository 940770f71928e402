use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("無效的 json 格式")]
    InvalidJson,
    #[error("Invalid shift ID")]
    InvalidShiftId,
    #[error("Invalid start time format")]
    InvalidStartTime,
    #[error("Invalid end time format")]
    InvalidEndTime,
    #[error("shift {0} 不存在")]
    ShiftNotFound(i64),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::InvalidJson => StatusCode::BAD_REQUEST,
            AppError::InvalidShiftId => StatusCode::BAD_REQUEST,
            AppError::InvalidStartTime => StatusCode::BAD_REQUEST,
            AppError::InvalidEndTime => StatusCode::BAD_REQUEST,
            AppError::ShiftNotFound(_) => StatusCode::NOT_FOUND,
        };

        let error_message = self.to_string();
        (status_code, error_message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(AppError::InvalidJson), StatusCode::BAD_REQUEST);
        assert_eq!(get_status(AppError::InvalidShiftId), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_status(AppError::InvalidStartTime),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::InvalidEndTime),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::ShiftNotFound(7)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_not_found_message_carries_id() {
        let err = AppError::ShiftNotFound(42);
        assert_eq!(err.to_string(), "shift 42 不存在");
    }
}
