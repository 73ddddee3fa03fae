//! 테스트 전용 유틸리티
//!
//! 원격 API 없이 핸들러와 쿼리 핸들러를 검증하기 위한 인메모리 `UserDirectory`를 제공합니다.

use std::collections::BTreeMap;
use std::sync::Mutex;
use async_trait::async_trait;
use serde_json::{Value, json};
use crate::domain::users::{NormalizedQuery, UserRecord};
use crate::services::phoenix::{PhoenixError, UserDirectory};

/// 호출 기록을 남기는 인메모리 사용자 디렉터리
///
/// `fail_with`가 설정되면 모든 호출이 해당 상태 코드의 `RemoteApi` 에러로 실패합니다.
#[derive(Default)]
pub struct FixtureDirectory {
    users: Mutex<BTreeMap<u64, UserRecord>>,
    next_id: Mutex<u64>,
    last_query: Mutex<Option<NormalizedQuery>>,
    fail_with: Option<(u16, String)>,
}

impl FixtureDirectory {
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        let fixture = Self::default();
        {
            let mut store = fixture.users.lock().unwrap();
            for user in users {
                let id = user.get("id").and_then(Value::as_u64).unwrap_or(0);
                store.insert(id, user);
            }
            *fixture.next_id.lock().unwrap() = store.keys().max().copied().unwrap_or(0) + 1;
        }
        fixture
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self {
            fail_with: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    pub fn last_query(&self) -> Option<NormalizedQuery> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.users.lock().unwrap().contains_key(&id)
    }

    fn check(&self) -> Result<(), PhoenixError> {
        match &self.fail_with {
            Some((status, body)) => Err(PhoenixError::RemoteApi {
                status: *status,
                body: body.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_found() -> PhoenixError {
        PhoenixError::RemoteApi {
            status: 404,
            body: "not found".to_string(),
        }
    }
}

pub fn user(id: u64, first_name: &str) -> UserRecord {
    match json!({ "id": id, "first_name": first_name }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[async_trait]
impl UserDirectory for FixtureDirectory {
    async fn list_users(&self, query: &NormalizedQuery) -> Result<Vec<UserRecord>, PhoenixError> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.check()?;
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn get_user(&self, id: u64) -> Result<UserRecord, PhoenixError> {
        self.check()?;
        self.users
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_user(&self, data: &UserRecord) -> Result<UserRecord, PhoenixError> {
        self.check()?;
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id = (*next_id).max(1);
            let id = *next_id;
            *next_id += 1;
            id
        };
        let mut created = data.clone();
        created.insert("id".to_string(), Value::from(id));
        self.users.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update_user(&self, id: u64, data: &UserRecord) -> Result<UserRecord, PhoenixError> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        let existing = users.get_mut(&id).ok_or_else(Self::not_found)?;
        for (key, value) in data {
            existing.insert(key.clone(), value.clone());
        }
        Ok(existing.clone())
    }

    async fn delete_user(&self, id: u64) -> Result<(), PhoenixError> {
        self.check()?;
        self.users
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(Self::not_found)
    }
}
