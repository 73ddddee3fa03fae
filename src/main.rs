//! Phoenix 사용자 포털 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 Phoenix 사용자 API 클라이언트를 초기화합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use phoenix_user_portal::config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
use phoenix_user_portal::routes::configure_all_routes;
use phoenix_user_portal::services::phoenix::{PhoenixClient, UserDirectory};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Phoenix 사용자 포털 시작중... (environment: {:?})", Environment::current());

    let client = PhoenixClient::from_config().map_err(|e| {
        error!("Phoenix 클라이언트 초기화 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ Phoenix API 클라이언트 준비 완료: {}", client.base_url());

    let directory: Arc<dyn UserDirectory> = Arc::new(client);

    start_http_server(web::Data::from(directory)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(directory: web::Data<dyn UserDirectory>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "RATE_LIMIT_PER_SECOND 와 RATE_LIMIT_BURST_SIZE 는 0보다 커야 합니다",
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(directory.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 stderr로 출력
    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                eprintln!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                eprintln!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// 운영 환경이 아니면 이 크레이트의 debug 로그(Phoenix 요청 내역)까지 기본으로 출력합니다.
///
/// ```bash
/// # Phoenix 요청 로그까지 확인
/// RUST_LOG=info,phoenix_user_portal=debug cargo run
/// ```
fn init_logging() {
    let default_filter = if Environment::current().is_production() {
        "info,actix_web=info"
    } else {
        "info,actix_web=info,phoenix_user_portal=debug"
    };

    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS` 환경변수로 허용 Origin 목록을 바꿀 수 있습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
