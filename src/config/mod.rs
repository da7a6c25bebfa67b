use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

const DEFAULT_API_URL_TEMPLATE: &str = "https://api-{app_id}.sendbird.com/v3";
const APP_ID_PLACEHOLDER: &str = "{app_id}";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub application_id: String,
    pub api_token: String,
    pub api_url_template: String,
    pub request_interval_ms: u64,
    pub burst_window_ms: u64,
    pub burst_limit: usize,
    pub max_batch_size: usize,
    pub search_limit: u32,
    pub http_timeout_secs: u64,
}

/// 应用凭证，`init_application` 时整体替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub application_id: String,
    pub api_token: String,
}

impl Credentials {
    pub fn new(application_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            api_token: api_token.into(),
        }
    }

    /// 根据模板生成 API 根地址
    pub fn api_base_url(&self, template: &str) -> String {
        template.replace(APP_ID_PLACEHOLDER, &self.application_id)
    }
}

impl Config {
    pub fn new(application_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Config {
            application_id: application_id.into(),
            api_token: api_token.into(),
            api_url_template: DEFAULT_API_URL_TEMPLATE.to_string(),
            request_interval_ms: 1000,
            burst_window_ms: 1000,
            burst_limit: 10,
            max_batch_size: 10,
            search_limit: 100,
            http_timeout_secs: 30,
        }
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let mut config = Config::new(env::var("APP_ID")?, env::var("API_TOKEN")?);

        if let Ok(template) = env::var("API_URL_TEMPLATE") {
            config.api_url_template = template;
        }
        config.request_interval_ms = parse_or("REQUEST_INTERVAL_MS", config.request_interval_ms);
        config.burst_window_ms = parse_or("BURST_WINDOW_MS", config.burst_window_ms);
        config.burst_limit = parse_or("BURST_LIMIT", config.burst_limit);
        config.max_batch_size = parse_or("MAX_BATCH_SIZE", config.max_batch_size);
        config.search_limit = parse_or("SEARCH_LIMIT", config.search_limit);
        config.http_timeout_secs = parse_or("HTTP_TIMEOUT_SECS", config.http_timeout_secs);

        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.application_id.clone(), self.api_token.clone())
    }

    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }

    pub fn burst_window(&self) -> Duration {
        Duration::from_millis(self.burst_window_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid value for {}: {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}
