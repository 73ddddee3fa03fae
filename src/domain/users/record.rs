//! Phoenix API가 돌려주는 사용자 레코드와 응답 envelope

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Phoenix API의 사용자 레코드
///
/// `id`, `first_name`, `last_name`, `gender`, `birthdate` 등을 담고 있지만
/// 이 서비스는 형태를 검증하거나 변환하지 않고 그대로 전달합니다.
pub type UserRecord = Map<String, Value>;

/// 성공 응답의 `{ "data": ... }` 래퍼
///
/// `data`가 없거나 `null`이면 빈 결과로 취급합니다. 오류가 아닙니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteEnvelope<T> {
    pub data: Option<T>,
}

impl<T: Default> RemoteEnvelope<T> {
    pub fn into_data(self) -> T {
        self.data.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_unwraps_data() {
        let envelope: RemoteEnvelope<Vec<UserRecord>> =
            serde_json::from_value(json!({ "data": [{ "id": 1, "first_name": "Ana" }] })).unwrap();

        let users = envelope.into_data();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].get("first_name"), Some(&json!("Ana")));
    }

    #[test]
    fn test_envelope_without_data_is_empty() {
        let envelope: RemoteEnvelope<Vec<UserRecord>> = serde_json::from_value(json!({})).unwrap();
        assert!(envelope.into_data().is_empty());

        let envelope: RemoteEnvelope<UserRecord> =
            serde_json::from_value(json!({ "data": null, "meta": {} })).unwrap();
        assert!(envelope.into_data().is_empty());
    }

    #[test]
    fn test_envelope_rejects_mismatched_shape() {
        let result: Result<RemoteEnvelope<Vec<UserRecord>>, _> =
            serde_json::from_value(json!({ "data": "nope" }));
        assert!(result.is_err());
    }
}
