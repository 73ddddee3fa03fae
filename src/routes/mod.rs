//! API 라우트 설정 모듈
//!
//! 사용자 관리 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(directory.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러가 사용할 `web::Data<dyn UserDirectory>`는 호출 측에서 `app_data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /users` - 사용자 목록 조회 (필터/정렬)
/// - `GET /users/{user_id}` - 사용자 조회
/// - `POST /users` - 사용자 생성
/// - `PUT /users/{user_id}` - 사용자 수정
/// - `DELETE /users/{user_id}` - 사용자 삭제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"Ana","last_name":"Silva","gender":"female","birthdate":"1990-04-02"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Phoenix API 연결 여부는 확인하지 않습니다.
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "phoenix_user_portal",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
