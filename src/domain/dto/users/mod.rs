//! 사용자 관련 요청 DTO

pub mod user_payload;

pub use user_payload::UserPayload;
