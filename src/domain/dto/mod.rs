//! # Data Transfer Objects
//!
//! HTTP 요청 본문을 구조화된 Rust 타입으로 역직렬화하고 `validator`로 검증합니다.

pub mod users;
