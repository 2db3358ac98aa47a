use std::time::Duration;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub sweep_interval: Duration,
    pub presence_timeout_ms: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: dotenv::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://batepapo.db?mode=rwc".to_owned()),
            bind_addr: dotenv::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_owned()),
            sweep_interval: Duration::from_millis(env_ms("SWEEP_INTERVAL_MS", 15_000)),
            presence_timeout_ms: env_ms("PRESENCE_TIMEOUT_MS", 10_000) as i64,
        }
    }
}

fn env_ms(key: &str, default: u64) -> u64 {
    dotenv::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
