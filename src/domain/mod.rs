//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── users   - 목록 필터, 쿼리 정규화, Phoenix 사용자 레코드
//! └── dto     - 인바운드 요청 DTO (생성/수정)
//! ```
//!
//! 모든 값은 요청 단위로 생성되고 응답 후 버려집니다. 캐시나 영속 저장은 없습니다.

pub mod users;
pub mod dto;
