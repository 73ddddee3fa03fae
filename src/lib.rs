//! Phoenix 사용자 포털
//!
//! 원격 Phoenix 사용자 관리 API(`/api/users`)를 감싸는 Rust 기반 어댑터 서비스입니다.
//! 사용자 관리 화면의 목록 필터를 정규화하고, CRUD 요청을 Phoenix API로 위임합니다.
//!
//! # Features
//!
//! - **쿼리 정규화**: 허용된 7개 필터 키 중 값이 있는 항목만 전달
//! - **원격 클라이언트**: Phoenix API의 `data` 봉투 해제, 4xx/5xx 에러 보존
//! - **입력 검증**: 생성/수정 본문의 이름, 성별, 생년월일 검증
//! - **Rate Limiting / CORS**: `actix-governor`, `actix-cors` 미들웨어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /users, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  UserDirectory  │ ← PhoenixClient (reqwest)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Phoenix API   │ ← 원격 사용자 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use phoenix_user_portal::domain::users::UserFilter;
//! use phoenix_user_portal::services::phoenix::{PhoenixClient, UserDirectory};
//!
//! let client = PhoenixClient::new("http://localhost:4000/")?;
//!
//! let filter = UserFilter {
//!     last_name: Some("Silva".to_string()),
//!     gender: Some(String::new()), // 빈 값은 전달되지 않음
//!     ..Default::default()
//! };
//!
//! let users = client.list_users(&filter.normalize()).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;
