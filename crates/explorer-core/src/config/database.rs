//! Database configuration.

use serde::{Deserialize, Serialize};

/// PostgreSQL connection and pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database server host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Database server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login role.
    #[serde(default = "default_user")]
    pub user: String,
    /// Login password.
    #[serde(default)]
    pub password: String,
    /// Database name.
    #[serde(default = "default_database")]
    pub database: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Timeout for a single connection attempt, in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
    /// How many times startup tries to reach the database before giving up.
    #[serde(default = "default_connect_attempts")]
    pub connect_attempts: u32,
    /// Fixed delay between startup connection attempts, in seconds.
    #[serde(default = "default_connect_retry_delay")]
    pub connect_retry_delay_seconds: u64,
    /// Apply pending migrations at startup.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
            connect_attempts: default_connect_attempts(),
            connect_retry_delay_seconds: default_connect_retry_delay(),
            run_migrations: default_run_migrations(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_database() -> String {
    "explorer".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_connect_attempts() -> u32 {
    5
}

fn default_connect_retry_delay() -> u64 {
    5
}

fn default_run_migrations() -> bool {
    true
}
