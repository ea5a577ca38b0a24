use std::env;
use log::debug;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

pub struct AppConfig {
    pub log_level: String,
}

impl AppConfig {
    /// Reads settings from the process environment (after `.env` is loaded).
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        AppConfig { log_level }
    }

    pub fn init_logging(&self) {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or(self.log_level.as_str()));
        debug!("Logging initialised at level {}", self.log_level);
    }
}
