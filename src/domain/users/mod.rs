//! 사용자 도메인 모델
//!
//! - [`filter`] - 목록 조회 조건과 쿼리 정규화
//! - [`record`] - Phoenix API 사용자 레코드와 응답 envelope

pub mod filter;
pub mod record;

pub use filter::{FilterKey, NormalizedQuery, UserFilter};
pub use record::{RemoteEnvelope, UserRecord};
