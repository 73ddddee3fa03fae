//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중식 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`server_config`] - 실행 환경, 바인딩 주소, Rate Limiting, CORS 설정
//! - [`phoenix_config`] - 원격 Phoenix API 접속 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # Phoenix API
//! export PHOENIX_BASE_URL="https://phoenix.internal"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod server_config;
pub mod phoenix_config;

pub use server_config::*;
pub use phoenix_config::*;
