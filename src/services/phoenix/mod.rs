//! 원격 Phoenix 사용자 API 연동 모듈
//!
//! [`UserDirectory`] 포트와 이를 구현하는 [`PhoenixClient`]를 제공합니다.

pub mod phoenix_client;

pub use phoenix_client::{PhoenixClient, PhoenixError, UserDirectory};
