use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde_json::json;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

use crate::logging::{log_event, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = parse_non_empty_string(lookup("PORTFOLIO_DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_non_empty_string(lookup("LOG_LEVEL"))
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: Arc<ServerConfig>,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;

    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
            "logLevel": config.log_level.as_str(),
        }),
    );

    serve(listener, config).await?;
    Ok(())
}

async fn serve(listener: TcpListener, config: ServerConfig) -> std::io::Result<()> {
    axum::serve(listener, router(config)).await
}

fn router(config: ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state, log_requests))
}

async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    log_event(
        state.config.log_level,
        LogLevel::Info,
        "http_request",
        json!({
            "requestId": request_id,
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "latencyMs": duration_ms(started.elapsed()),
        }),
    );

    response
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn parse_u16_with_bounds(raw: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    raw.and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn valid_values_override_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", " 3000 "),
            ("PORTFOLIO_DIST_DIR", "public"),
            ("LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_values_fall_back_silently() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "0"),
            ("PORTFOLIO_DIST_DIR", "   "),
            ("LOG_LEVEL", "verbose"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);

        assert_eq!(parse_u16_with_bounds(Some("70000".to_string()), 1, PORT_BOUNDS), 1);
    }

    #[test]
    fn incoming_request_id_is_reused() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn generated_request_ids_are_unique() {
        let headers = HeaderMap::new();
        let first = resolve_request_id(&headers);
        let second = resolve_request_id(&headers);
        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }

    async fn fetch(port: u16, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(("127.0.0.1", port))
            .await
            .expect("server accepts connections");
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream
            .write_all(request.as_bytes())
            .await
            .expect("request written");

        let mut response = String::new();
        stream
            .read_to_string(&mut response)
            .await
            .expect("response read");
        response
    }

    #[tokio::test]
    async fn serves_dist_and_falls_back_to_index() {
        let dist_dir = std::env::temp_dir().join(format!("portfolio-dist-{}", generate_request_id()));
        std::fs::create_dir_all(&dist_dir).expect("temp dist dir");
        std::fs::write(dist_dir.join("index.html"), "<div id=\"app\"></div>").expect("index written");
        std::fs::write(dist_dir.join("app.js"), "console.log(1)").expect("asset written");

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        let config = ServerConfig {
            port,
            dist_dir: dist_dir.clone(),
            log_level: LogLevel::Warn,
        };
        let server = tokio::spawn(serve(listener, config));

        let asset = fetch(port, "/app.js").await;
        assert!(asset.starts_with("HTTP/1.1 200"), "{asset}");
        assert!(asset.to_ascii_lowercase().contains(REQUEST_ID_HEADER));
        assert!(asset.contains("console.log(1)"));

        let deep_link = fetch(port, "/experience").await;
        assert!(deep_link.contains("<div id=\"app\"></div>"), "{deep_link}");

        server.abort();
        let _ = std::fs::remove_dir_all(&dist_dir);
    }
}
