//! 사용자 조회 애플리케이션 서비스
//!
//! 메시지/쿼리 핸들러 경로로 사용자 목록을 조회합니다.
//! HTTP 핸들러와 동일한 정규화 규칙(`UserFilter::normalize`)을 사용합니다.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{ListUsersHandler, ListUsersQuery};
//!
//! let handler = ListUsersHandler::new(Arc::new(PhoenixClient::from_config()?));
//! let users = handler.handle(ListUsersQuery { first_name: Some("Ana".into()), ..Default::default() }).await?;
//! ```

pub mod list_users;

pub use list_users::{ListUsersHandler, ListUsersQuery};
