//! # Phoenix API 클라이언트
//!
//! 원격 사용자 관리 API("Phoenix")와 통신하는 유일한 지점입니다.
//!
//! ## 엔드포인트
//!
//! | 용도 | 메서드 | 경로 | 성공 응답 |
//! |------|--------|------|-----------|
//! | 목록 조회 | `GET` | `/api/users?first_name=...` | `200 {"data": [..]}` |
//! | 단건 조회 | `GET` | `/api/users/{id}` | `200 {"data": {..}}` |
//! | 생성 | `POST` | `/api/users` | `200/201 {"data": {..}}` |
//! | 수정 | `PUT` | `/api/users/{id}` | `200 {"data": {..}}` |
//! | 삭제 | `DELETE` | `/api/users/{id}` | `204` |
//!
//! ## 응답 처리 규칙
//!
//! 1. 상태 코드 400 이상이면 `PhoenixError::RemoteApi` (상태 코드 + 원문 본문).
//!    본문을 끝까지 읽지 못하면 `PhoenixError::Transport`
//! 2. 204 No Content면 빈 결과
//! 3. 그 외에는 본문을 JSON으로 파싱하고 `data` 값을 반환, `data`가 없으면 빈 결과
//!    (스칼라 JSON 본문은 `PhoenixError::Decode`)
//!
//! 재시도, 서킷 브레이커, 자체 타임아웃 정책은 없습니다. 타임아웃은
//! `PHOENIX_TIMEOUT_SECS`로 전송 계층(reqwest)에 설정할 수 있습니다.
//!
//! ```rust,ignore
//! use phoenix_user_portal::services::phoenix::{PhoenixClient, UserDirectory};
//! use phoenix_user_portal::domain::users::UserFilter;
//!
//! let client = PhoenixClient::new("http://localhost:4000/")?;
//! let filter = UserFilter { first_name: Some("Ana".into()), ..Default::default() };
//! let users = client.list_users(&filter.normalize()).await?;
//! ```

use std::time::Duration;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use crate::config::PhoenixConfig;
use crate::domain::users::{NormalizedQuery, RemoteEnvelope, UserRecord};

/// Phoenix API 호출 에러
#[derive(Error, Debug)]
pub enum PhoenixError {
    /// 원격 API가 400 이상의 상태 코드로 응답
    ///
    /// 4xx/5xx를 구분하지 않으며 본문은 가공하지 않습니다.
    #[error("Phoenix API error {status}: {body}")]
    RemoteApi { status: u16, body: String },

    /// 연결 실패, DNS 실패, 타임아웃 등 전송 계층 에러
    #[error("Phoenix 요청 실패: {0}")]
    Transport(#[from] reqwest::Error),

    /// 성공 응답 본문이 JSON이 아니거나 `data` 형태가 맞지 않음
    #[error("Phoenix 응답 파싱 실패: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PhoenixError {
    /// `RemoteApi` 에러의 원격 상태 코드
    pub fn status(&self) -> Option<u16> {
        match self {
            PhoenixError::RemoteApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// 사용자 디렉터리 포트
///
/// HTTP 핸들러와 쿼리 핸들러는 이 trait에만 의존합니다.
/// 운영 환경에서는 [`PhoenixClient`]가 구현합니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self, query: &NormalizedQuery) -> Result<Vec<UserRecord>, PhoenixError>;

    async fn get_user(&self, id: u64) -> Result<UserRecord, PhoenixError>;

    async fn create_user(&self, data: &UserRecord) -> Result<UserRecord, PhoenixError>;

    async fn update_user(&self, id: u64, data: &UserRecord) -> Result<UserRecord, PhoenixError>;

    async fn delete_user(&self, id: u64) -> Result<(), PhoenixError>;
}

/// Phoenix REST API 클라이언트
///
/// base URL과 `reqwest::Client` 핸들 외에 상태가 없으므로
/// 여러 워커에서 공유해도 안전합니다.
#[derive(Debug, Clone)]
pub struct PhoenixClient {
    http: Client,
    base_url: String,
}

impl PhoenixClient {
    pub const USERS_PATH: &'static str = "/api/users";

    pub fn new(base_url: impl Into<String>) -> Result<Self, PhoenixError> {
        Self::build(base_url, None)
    }

    /// `PhoenixConfig` 환경 변수로 클라이언트를 생성합니다.
    pub fn from_config() -> Result<Self, PhoenixError> {
        Self::build(PhoenixConfig::base_url(), PhoenixConfig::timeout())
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn build(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, PhoenixError> {
        let mut builder = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_http_client(builder.build()?, base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_path(id: u64) -> String {
        format!("{}/{}", Self::USERS_PATH, id)
    }

    /// 공통 요청 처리
    ///
    /// 204 응답은 `Value::Null`로 돌려주며, 이후 `unwrap_data`에서 빈 결과가 됩니다.
    async fn request<F>(&self, method: Method, path: &str, configure: F) -> Result<Value, PhoenixError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder + Send,
    {
        let url = self.endpoint(path);
        log::debug!("Phoenix 요청: {} {}", method, url);

        let response = configure(self.http.request(method.clone(), &url))
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() >= 400 {
            let body = response.text().await?;
            log::warn!("Phoenix API 에러: {} {} -> {}", method, url, status.as_u16());
            return Err(PhoenixError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(Value::Null);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `{ "data": ... }` envelope에서 값을 꺼냅니다. `data`가 없으면 기본값.
    ///
    /// 본문이 없거나(204) 최상위가 배열이면 `data` 키가 없는 것과 같습니다.
    /// 문자열, 숫자 같은 스칼라 본문은 `Decode` 에러입니다.
    fn unwrap_data<T>(payload: Value) -> Result<T, PhoenixError>
    where
        T: DeserializeOwned + Default,
    {
        match payload {
            Value::Null | Value::Array(_) => Ok(T::default()),
            other => {
                let envelope: RemoteEnvelope<T> = serde_json::from_value(other)?;
                Ok(envelope.into_data())
            }
        }
    }
}

#[async_trait]
impl UserDirectory for PhoenixClient {
    async fn list_users(&self, query: &NormalizedQuery) -> Result<Vec<UserRecord>, PhoenixError> {
        let payload = self
            .request(Method::GET, Self::USERS_PATH, |req| {
                if query.is_empty() { req } else { req.query(query) }
            })
            .await?;

        Self::unwrap_data(payload)
    }

    async fn get_user(&self, id: u64) -> Result<UserRecord, PhoenixError> {
        let payload = self
            .request(Method::GET, &Self::user_path(id), |req| req)
            .await?;

        Self::unwrap_data(payload)
    }

    async fn create_user(&self, data: &UserRecord) -> Result<UserRecord, PhoenixError> {
        let payload = self
            .request(Method::POST, Self::USERS_PATH, |req| req.json(data))
            .await?;

        Self::unwrap_data(payload)
    }

    async fn update_user(&self, id: u64, data: &UserRecord) -> Result<UserRecord, PhoenixError> {
        let payload = self
            .request(Method::PUT, &Self::user_path(id), |req| req.json(data))
            .await?;

        Self::unwrap_data(payload)
    }

    async fn delete_user(&self, id: u64) -> Result<(), PhoenixError> {
        self.request(Method::DELETE, &Self::user_path(id), |req| req)
            .await?;

        Ok(())
    }
}
