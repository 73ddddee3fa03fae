//! 사용자 생성/수정 요청 DTO
//!
//! 생성·수정 화면에서 받는 네 가지 필드를 정의하고 검증합니다.
//! 검증은 인바운드 HTTP 계층에서만 수행되며, Phoenix 클라이언트는 받은 데이터를 그대로 전달합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};
use crate::domain::users::UserRecord;

pub const GENDER_CHOICES: [&str; 2] = ["male", "female"];
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserPayload {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "성은 1-100자 사이여야 합니다"))]
    pub last_name: String,

    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[validate(custom(function = "validate_birthdate"))]
    pub birthdate: String,
}

impl UserPayload {
    /// Phoenix API로 보낼 JSON 본문
    pub fn to_record(&self) -> UserRecord {
        let mut record = UserRecord::new();
        record.insert("first_name".to_string(), Value::from(self.first_name.as_str()));
        record.insert("last_name".to_string(), Value::from(self.last_name.as_str()));
        record.insert("gender".to_string(), Value::from(self.gender.as_str()));
        record.insert("birthdate".to_string(), Value::from(self.birthdate.as_str()));
        record
    }
}

fn validate_gender(gender: &str) -> Result<(), ValidationError> {
    if !GENDER_CHOICES.contains(&gender) {
        return Err(ValidationError::new("invalid_gender")
            .with_message("성별은 male 또는 female 이어야 합니다".into()));
    }
    Ok(())
}

fn validate_birthdate(birthdate: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(birthdate, BIRTHDATE_FORMAT)
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("invalid_birthdate")
                .with_message("생년월일은 YYYY-MM-DD 형식이어야 합니다".into())
        })
}
