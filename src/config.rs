use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub ssl: bool,
    pub pool_size: u32,
    pub acquire_timeout: Duration,
    pub statement_timeout: Duration,
}

impl DbConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: env_parse("DB_PORT", 5432),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "stock_registry".to_string()),
            ssl: env_parse("DB_SSL", false),
            pool_size: env_parse("DB_POOL_SIZE", 10),
            acquire_timeout: Duration::from_millis(env_parse("DB_ACQUIRE_TIMEOUT_MS", 60_000)),
            statement_timeout: Duration::from_millis(env_parse("DB_STATEMENT_TIMEOUT_MS", 30_000)),
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(if self.ssl {
                PgSslMode::Require
            } else {
                PgSslMode::Prefer
            })
            // statement_timeout takes a bare integer as milliseconds
            .options([("statement_timeout", self.statement_timeout.as_millis().to_string())])
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse("PORT", 3000),
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
