//! # 사용자 목록 필터와 쿼리 정규화
//!
//! 사용자 목록 조회 조건(`UserFilter`)을 Phoenix API가 이해하는 쿼리 파라미터
//! 맵(`NormalizedQuery`)으로 변환합니다. HTTP 핸들러와 쿼리 핸들러가 동일한
//! 정규화 규칙을 공유합니다.
//!
//! ## 정규화 규칙
//!
//! | 필드 | 쿼리 키 |
//! |------|---------|
//! | `first_name` | `first_name` |
//! | `last_name` | `last_name` |
//! | `gender` | `gender` |
//! | `birthdate_from` | `birthdate_from` |
//! | `birthdate_to` | `birthdate_to` |
//! | `sort_by` | `sort_by` |
//! | `sort_dir` | `sort_dir` |
//!
//! 값이 `None`이거나 빈 문자열이면 키 자체가 생략됩니다.
//! 공백 제거, 타입 변환, 허용값 검증은 하지 않습니다.
//!
//! ```rust
//! use phoenix_user_portal::domain::users::filter::{FilterKey, UserFilter};
//!
//! let filter = UserFilter {
//!     first_name: Some("Ana".to_string()),
//!     gender: Some(String::new()),
//!     ..Default::default()
//! };
//!
//! let query = filter.normalize();
//! assert_eq!(query.get(FilterKey::FirstName), Some("Ana"));
//! assert!(!query.contains_key(FilterKey::Gender));
//! ```

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Phoenix API로 전달이 허용된 쿼리 키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterKey {
    FirstName,
    LastName,
    Gender,
    BirthdateFrom,
    BirthdateTo,
    SortBy,
    SortDir,
}

impl FilterKey {
    pub const ALL: [FilterKey; 7] = [
        FilterKey::FirstName,
        FilterKey::LastName,
        FilterKey::Gender,
        FilterKey::BirthdateFrom,
        FilterKey::BirthdateTo,
        FilterKey::SortBy,
        FilterKey::SortDir,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::FirstName => "first_name",
            FilterKey::LastName => "last_name",
            FilterKey::Gender => "gender",
            FilterKey::BirthdateFrom => "birthdate_from",
            FilterKey::BirthdateTo => "birthdate_to",
            FilterKey::SortBy => "sort_by",
            FilterKey::SortDir => "sort_dir",
        }
    }

    /// 쿼리 키 문자열을 해석합니다. 허용 목록에 없는 키는 `None`.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == key)
    }
}

/// 사용자 목록 조회 조건
///
/// 요청마다 생성되고 정규화 후 버려지는 값 객체입니다.
/// 쿼리 스트링 형태(snake_case 키)로 역직렬화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub birthdate_from: Option<String>,
    pub birthdate_to: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl UserFilter {
    /// 원시 쿼리 `(key, value)` 쌍에서 필터를 구성합니다.
    ///
    /// 허용 목록에 없는 키는 버리고, 같은 키가 반복되면 마지막 값을 사용합니다.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            if let Some(key) = FilterKey::parse(key.as_ref()) {
                *filter.slot_mut(key) = Some(value.into());
            }
        }
        filter
    }

    pub fn value(&self, key: FilterKey) -> Option<&str> {
        let slot = match key {
            FilterKey::FirstName => &self.first_name,
            FilterKey::LastName => &self.last_name,
            FilterKey::Gender => &self.gender,
            FilterKey::BirthdateFrom => &self.birthdate_from,
            FilterKey::BirthdateTo => &self.birthdate_to,
            FilterKey::SortBy => &self.sort_by,
            FilterKey::SortDir => &self.sort_dir,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, key: FilterKey) -> &mut Option<String> {
        match key {
            FilterKey::FirstName => &mut self.first_name,
            FilterKey::LastName => &mut self.last_name,
            FilterKey::Gender => &mut self.gender,
            FilterKey::BirthdateFrom => &mut self.birthdate_from,
            FilterKey::BirthdateTo => &mut self.birthdate_to,
            FilterKey::SortBy => &mut self.sort_by,
            FilterKey::SortDir => &mut self.sort_dir,
        }
    }

    /// 값이 있는(빈 문자열이 아닌) 필드만 쿼리 맵에 담습니다.
    pub fn normalize(&self) -> NormalizedQuery {
        let params = FilterKey::ALL
            .into_iter()
            .filter_map(|key| {
                self.value(key)
                    .filter(|value| !value.is_empty())
                    .map(|value| (key.as_str(), value.to_string()))
            })
            .collect();

        NormalizedQuery { params }
    }
}

/// 정규화된 쿼리 파라미터 맵
///
/// `UserFilter::normalize`로만 만들 수 있으므로 빈 값이 들어있는 키는 존재하지 않습니다.
/// URL 쿼리 파라미터로 그대로 직렬화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedQuery {
    params: BTreeMap<&'static str, String>,
}

impl NormalizedQuery {
    pub fn get(&self, key: FilterKey) -> Option<&str> {
        self.params.get(key.as_str()).map(String::as_str)
    }

    pub fn contains_key(&self, key: FilterKey) -> bool {
        self.params.contains_key(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.params.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_filter() -> UserFilter {
        UserFilter {
            first_name: Some("Ana".to_string()),
            last_name: Some("Silva".to_string()),
            gender: Some("female".to_string()),
            birthdate_from: Some("1990-01-01".to_string()),
            birthdate_to: Some("2000-12-31".to_string()),
            sort_by: Some("last_name".to_string()),
            sort_dir: Some("desc".to_string()),
        }
    }

    #[test]
    fn test_normalize_drops_empty_fields() {
        let filter = UserFilter {
            first_name: Some("Ana".to_string()),
            gender: Some(String::new()),
            ..Default::default()
        };

        let query = filter.normalize();

        assert_eq!(query.len(), 1);
        assert_eq!(query.get(FilterKey::FirstName), Some("Ana"));
        assert!(!query.contains_key(FilterKey::Gender));
    }

    #[test]
    fn test_normalize_empty_filter_is_empty() {
        assert!(UserFilter::default().normalize().is_empty());

        let blank = UserFilter {
            first_name: Some(String::new()),
            last_name: Some(String::new()),
            gender: Some(String::new()),
            birthdate_from: Some(String::new()),
            birthdate_to: Some(String::new()),
            sort_by: Some(String::new()),
            sort_dir: Some(String::new()),
        };
        assert!(blank.normalize().is_empty());
    }

    #[test]
    fn test_normalize_maps_every_field_to_its_key() {
        let query = full_filter().normalize();

        assert_eq!(query.len(), 7);
        assert_eq!(query.get(FilterKey::LastName), Some("Silva"));
        assert_eq!(query.get(FilterKey::BirthdateFrom), Some("1990-01-01"));
        assert_eq!(query.get(FilterKey::BirthdateTo), Some("2000-12-31"));
        assert_eq!(query.get(FilterKey::SortBy), Some("last_name"));
        assert_eq!(query.get(FilterKey::SortDir), Some("desc"));
        assert!(query.iter().all(|(_, value)| !value.is_empty()));
    }

    #[test]
    fn test_normalize_keeps_values_verbatim() {
        // 공백 유지, 허용값 검증 없음
        let filter = UserFilter {
            first_name: Some("  Ana ".to_string()),
            gender: Some("unknown".to_string()),
            sort_dir: Some(" ".to_string()),
            ..Default::default()
        };

        let query = filter.normalize();

        assert_eq!(query.get(FilterKey::FirstName), Some("  Ana "));
        assert_eq!(query.get(FilterKey::Gender), Some("unknown"));
        assert_eq!(query.get(FilterKey::SortDir), Some(" "));
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let filter = full_filter();
        assert_eq!(filter.normalize(), filter.normalize());
    }

    #[test]
    fn test_from_query_pairs_applies_allow_list() {
        let filter = UserFilter::from_query_pairs(vec![
            ("first_name", "Ana"),
            ("role", "admin"),
            ("page", "2"),
            ("sort_dir", "asc"),
        ]);

        assert_eq!(filter.first_name.as_deref(), Some("Ana"));
        assert_eq!(filter.sort_dir.as_deref(), Some("asc"));

        let query = filter.normalize();
        let keys: Vec<&str> = query.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["first_name", "sort_dir"]);
    }

    #[test]
    fn test_from_query_pairs_last_value_wins() {
        let filter = UserFilter::from_query_pairs(vec![
            ("gender", "male"),
            ("gender", "female"),
        ]);

        assert_eq!(filter.gender.as_deref(), Some("female"));
    }

    #[test]
    fn test_filter_key_parse() {
        for key in FilterKey::ALL {
            assert_eq!(FilterKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(FilterKey::parse("firstName"), None);
        assert_eq!(FilterKey::parse(""), None);
    }

    #[test]
    fn test_normalized_query_serializes_as_flat_map() {
        let filter = UserFilter {
            last_name: Some("Silva".to_string()),
            gender: None,
            ..Default::default()
        };

        let json = serde_json::to_value(filter.normalize()).unwrap();
        assert_eq!(json, serde_json::json!({ "last_name": "Silva" }));
    }

    #[test]
    fn test_user_filter_deserializes_from_partial_json() {
        let filter: UserFilter =
            serde_json::from_str(r#"{"first_name": "Ana", "sort_by": null}"#).unwrap();

        assert_eq!(filter.first_name.as_deref(), Some("Ana"));
        assert_eq!(filter.sort_by, None);
        assert_eq!(filter.last_name, None);
    }
}
