//! 사용자 목록 조회 쿼리와 핸들러

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use crate::domain::users::{UserFilter, UserRecord};
use crate::services::phoenix::{PhoenixError, UserDirectory};

/// 사용자 목록 조회 쿼리 메시지
///
/// 메시지 버스를 통해 전달되는 형태로, JSON에서는 camelCase 키를 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListUsersQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub birthdate_from: Option<String>,
    pub birthdate_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl From<ListUsersQuery> for UserFilter {
    fn from(query: ListUsersQuery) -> Self {
        let ListUsersQuery {
            first_name,
            last_name,
            gender,
            birthdate_from,
            birthdate_to,
            sort_by,
            sort_dir,
        } = query;

        Self {
            first_name,
            last_name,
            gender,
            birthdate_from,
            birthdate_to,
            sort_by,
            sort_dir,
        }
    }
}

/// `ListUsersQuery`를 처리하는 쿼리 핸들러
#[derive(Clone)]
pub struct ListUsersHandler {
    directory: Arc<dyn UserDirectory>,
}

impl ListUsersHandler {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, query: ListUsersQuery) -> Result<Vec<UserRecord>, PhoenixError> {
        let params = UserFilter::from(query).normalize();
        log::debug!("사용자 목록 쿼리 처리: {} 개 조건", params.len());

        self.directory.list_users(&params).await
    }
}
