//! # User Management HTTP Handlers
//!
//! 사용자 관리 화면이 호출하는 HTTP 엔드포인트 핸들러입니다.
//! 모든 요청은 [`UserDirectory`]를 통해 Phoenix 사용자 API로 위임되며,
//! 이 계층은 입력 검증과 HTTP 응답 변환만 담당합니다.
//!
//! ## 엔드포인트 목록
//!
//! | Method | Path | 설명 | 성공 응답 |
//! |--------|------|------|-----------|
//! | GET | `/users` | 필터 조건으로 사용자 목록 조회 | 200 OK |
//! | GET | `/users/{user_id}` | 단일 사용자 조회 | 200 OK |
//! | POST | `/users` | 사용자 생성 | 201 Created |
//! | PUT | `/users/{user_id}` | 사용자 수정 | 200 OK |
//! | DELETE | `/users/{user_id}` | 사용자 삭제 | 204 No Content |
//!
//! ## 목록 필터
//!
//! 목록 조회는 쿼리 문자열을 가공 없이 받은 뒤 허용된 7개 키만 남깁니다.
//!
//! ```bash
//! curl "http://localhost:8080/users?first_name=Ana&gender=female&sort_by=birthdate&sort_dir=desc"
//! ```
//!
//! 값이 빈 문자열인 키와 허용 목록에 없는 키는 Phoenix API로 전달되지 않습니다.
//!
//! ## 에러 응답
//!
//! 에러 변환 규칙은 [`AppError`](crate::core::errors::AppError)를 참고하세요. Phoenix API의 4xx 응답은
//! 같은 상태 코드로, 5xx 응답과 통신 실패는 502로 전달됩니다.

use actix_web::{web, HttpResponse, get, post, put, delete};
use validator::Validate;
use crate::core::errors::AppResult;
use crate::domain::dto::users::UserPayload;
use crate::domain::users::UserFilter;
use crate::services::phoenix::UserDirectory;

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users`
///
/// # 쿼리 파라미터
///
/// `first_name`, `last_name`, `gender`, `birthdate_from`, `birthdate_to`,
/// `sort_by`, `sort_dir` (모두 선택)
///
/// # 응답
///
/// ```json
/// [
///   { "id": 1, "first_name": "Ana", "last_name": "Silva", "gender": "female", "birthdate": "1990-04-02" }
/// ]
/// ```
#[get("")]
pub async fn list_users(
    directory: web::Data<dyn UserDirectory>,
    query: web::Query<Vec<(String, String)>>,
) -> AppResult<HttpResponse> {
    let params = UserFilter::from_query_pairs(query.into_inner()).normalize();
    log::debug!("사용자 목록 조회: {:?}", params);

    let users = directory.list_users(&params).await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 단일 사용자 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// Phoenix API가 404를 반환하면 그대로 404로 응답합니다.
#[get("/{user_id}")]
pub async fn get_user(
    directory: web::Data<dyn UserDirectory>,
    user_id: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let user = directory.get_user(user_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "first_name": "Ana",
///   "last_name": "Silva",
///   "gender": "female",
///   "birthdate": "1990-04-02"
/// }
/// ```
///
/// # 응답
///
/// - 201 Created: Phoenix API가 돌려준 생성된 사용자
/// - 400 Bad Request: 본문 검증 실패
/// - 422 Unprocessable Entity: Phoenix API가 거부한 경우 (원격 본문 포함)
#[post("")]
pub async fn create_user(
    directory: web::Data<dyn UserDirectory>,
    payload: web::Json<UserPayload>,
) -> AppResult<HttpResponse> {
    // 유효성 검사
    payload.validate()?;

    let user = directory.create_user(&payload.to_record()).await?;
    log::info!("사용자 생성 완료: {} {}", payload.first_name, payload.last_name);

    Ok(HttpResponse::Created().json(user))
}

/// 사용자 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /users/{user_id}`
///
/// 요청 본문은 생성과 동일한 형식입니다.
#[put("/{user_id}")]
pub async fn update_user(
    directory: web::Data<dyn UserDirectory>,
    user_id: web::Path<u64>,
    payload: web::Json<UserPayload>,
) -> AppResult<HttpResponse> {
    payload.validate()?;

    let user_id = user_id.into_inner();
    let user = directory.update_user(user_id, &payload.to_record()).await?;
    log::info!("사용자 수정 완료: {}", user_id);

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    directory: web::Data<dyn UserDirectory>,
    user_id: web::Path<u64>,
) -> AppResult<HttpResponse> {
    let user_id = user_id.into_inner();
    directory.delete_user(user_id).await?;
    log::info!("사용자 삭제 완료: {}", user_id);

    Ok(HttpResponse::NoContent().finish())
}
