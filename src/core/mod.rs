//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 기반 기능을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 인바운드 HTTP 계층의 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **원격 에러 변환**: `PhoenixError` → `AppError` 자동 변환

pub mod errors;

pub use errors::*;
