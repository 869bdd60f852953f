use std::env;
use std::net::SocketAddr;

use crate::error::AppError;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SCHEDULE_PING_SECS: u64 = 5;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// 0 disables the schedule ticker.
    pub schedule_ping_secs: u64,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("BIND_ADDR is invalid: {}", e)))?;

        let schedule_ping_secs = match lookup("SCHEDULE_PING_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| AppError::Config(format!("SCHEDULE_PING_SECS is invalid: {}", e)))?,
            None => DEFAULT_SCHEDULE_PING_SECS,
        };

        Ok(Self {
            bind_addr,
            schedule_ping_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.schedule_ping_secs, 5);
    }

    #[test]
    fn test_overrides_and_errors() {
        let config = AppConfig::from_lookup(|key| match key {
            "BIND_ADDR" => Some("0.0.0.0:8080".to_string()),
            "SCHEDULE_PING_SECS" => Some("0".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.schedule_ping_secs, 0);

        let bad = AppConfig::from_lookup(|key| (key == "SCHEDULE_PING_SECS").then(|| "soon".to_string()));
        assert!(matches!(bad, Err(AppError::Config(_))));
    }
}
