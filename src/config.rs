use std::env;

/// Runtime configuration, read once at startup from the environment
/// (a local `.env` file is honored via dotenvy before this runs).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let database_url = env::var("NEWSAGGR_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://newsaggr.db?mode=rwc".to_string());
        let bind_addr =
            env::var("NEWSAGGR_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8088".to_string());
        let static_dir = env::var("NEWSAGGR_STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let fetch_timeout_secs = env::var("NEWSAGGR_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(20);

        Self {
            database_url,
            bind_addr,
            static_dir,
            fetch_timeout_secs,
        }
    }
}
