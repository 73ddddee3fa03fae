//! 원격 사용자 API 연동을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - `phoenix`: Phoenix 사용자 API HTTP 클라이언트와 `UserDirectory` 추상화
//! - `users`: 메시지 형태의 사용자 목록 조회 쿼리와 핸들러
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::phoenix::PhoenixClient;
//! use crate::services::users::{ListUsersHandler, ListUsersQuery};
//!
//! let client = Arc::new(PhoenixClient::new("http://localhost:4000")?);
//! let handler = ListUsersHandler::new(client);
//!
//! let users = handler.handle(ListUsersQuery {
//!     first_name: Some("Ana".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

pub mod phoenix;
pub mod users;
