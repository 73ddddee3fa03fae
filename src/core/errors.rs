//! # Application Error Handling System
//!
//! 인바운드 HTTP 계층의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러를 일관된 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 검증 실패 |
//! | `RemoteApi` (4xx) | 원격 상태 코드 그대로 | Phoenix API가 요청을 거부 |
//! | `RemoteApi` (5xx) | 502 Bad Gateway | Phoenix API 내부 오류 |
//! | `ExternalServiceError` | 502 Bad Gateway | 네트워크 실패, 응답 파싱 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Human readable error message"
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;
use crate::services::phoenix::PhoenixError;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Phoenix API가 400 이상의 상태 코드로 응답한 경우
    ///
    /// 원격 응답 본문을 가공 없이 그대로 보존합니다.
    #[error("Phoenix API error {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// 외부 서비스 통신 에러 (502 Bad Gateway)
    ///
    /// 연결 실패, 타임아웃, 응답 JSON 파싱 실패 등
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 설정 오류로 원격 요청을 구성할 수 없는 경우 등
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn http_status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RemoteApi { status, .. } => match StatusCode::from_u16(*status) {
                Ok(code) if code.is_client_error() => code,
                _ => StatusCode::BAD_GATEWAY,
            },
            AppError::ExternalServiceError(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.http_status();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

impl From<PhoenixError> for AppError {
    fn from(error: PhoenixError) -> Self {
        match error {
            PhoenixError::RemoteApi { status, body } => AppError::RemoteApi { status, body },
            // 잘못된 base URL 등 요청 자체를 만들지 못한 경우
            PhoenixError::Transport(e) if e.is_builder() => AppError::InternalError(e.to_string()),
            other => AppError::ExternalServiceError(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
