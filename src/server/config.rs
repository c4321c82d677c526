use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Days of inactivity after which a session expires.
    pub session_days: i64,
    /// Origin allowed to make cross-origin requests; none disables CORS headers.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_days = match std::env::var("SESSION_DAYS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "SESSION_DAYS".to_string(),
                value,
            })?,
            Err(_) => DEFAULT_SESSION_DAYS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_days,
            cors_origin: std::env::var("CORS_ORIGIN").ok(),
        })
    }
}
