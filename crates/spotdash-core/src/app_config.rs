use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Year prefix used to filter the distinct-dates query, e.g. `2025-`.
    pub date_year_prefix: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    pub media_base_url: String,
    pub media_api_key: Option<String>,
    pub media_request_timeout_secs: u64,
    pub answers_api_url: String,
    pub answers_api_key: Option<String>,
    pub answers_request_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("date_year_prefix", &self.date_year_prefix)
            .field("database_url", &"[redacted]")
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("media_base_url", &self.media_base_url)
            .field(
                "media_api_key",
                &self.media_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "media_request_timeout_secs",
                &self.media_request_timeout_secs,
            )
            .field("answers_api_url", &self.answers_api_url)
            .field(
                "answers_api_key",
                &self.answers_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "answers_request_timeout_secs",
                &self.answers_request_timeout_secs,
            )
            .finish()
    }
}
