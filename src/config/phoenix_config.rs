//! # Phoenix API 연결 설정
//!
//! 원격 사용자 관리 API("Phoenix")에 접속하기 위한 설정을 관리합니다.
//!
//! ```bash
//! export PHOENIX_BASE_URL="http://localhost:4000"
//! export PHOENIX_TIMEOUT_SECS="10"   # 선택, 미설정 시 reqwest 기본값
//! ```

use std::env;
use std::time::Duration;

pub const DEFAULT_PHOENIX_BASE_URL: &str = "http://localhost:4000";

pub struct PhoenixConfig;

impl PhoenixConfig {
    /// Phoenix API의 base URL.
    ///
    /// 끝의 `/` 정리는 클라이언트 생성 시점에 수행됩니다.
    pub fn base_url() -> String {
        env::var("PHOENIX_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                log::warn!(
                    "PHOENIX_BASE_URL not set, using default {}",
                    DEFAULT_PHOENIX_BASE_URL
                );
                DEFAULT_PHOENIX_BASE_URL.to_string()
            })
    }

    /// 전송 계층 타임아웃. 값이 없거나 잘못되면 `None`.
    pub fn timeout() -> Option<Duration> {
        env::var("PHOENIX_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| Self::parse_timeout(&raw))
    }

    pub fn parse_timeout(raw: &str) -> Option<Duration> {
        match raw.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(secs) => Some(Duration::from_secs(secs)),
            Err(e) => {
                log::error!("PHOENIX_TIMEOUT_SECS 파싱 실패: {}. 타임아웃 미적용", e);
                None
            }
        }
    }
}
