//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (사용자 관리 화면, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 입력 검증, 응답 변환      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserDirectory - Phoenix API 클라이언트         ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Phoenix 사용자 API (/api/users)               ← Remote
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<dyn UserDirectory>`로 디렉터리를 주입받습니다.
//! 운영 환경에서는 `PhoenixClient`가, 테스트에서는 인메모리 구현이 등록됩니다.
//!
//! ```rust,ignore
//! let directory: Arc<dyn UserDirectory> = Arc::new(PhoenixClient::from_config()?);
//!
//! App::new()
//!     .app_data(web::Data::from(directory))
//!     .service(
//!         web::scope("/users")
//!             .service(users::list_users)
//!             .service(users::get_user)
//!     )
//! ```

pub mod users;
