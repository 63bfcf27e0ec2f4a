use crate::shared::core::calendar::offset_from_minutes;
use chrono::{FixedOffset, Offset, Utc};
use std::net::SocketAddr;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CLINIC_TRACKING_BIND_ADDR";
pub const UTC_OFFSET_VAR: &str = "CLINIC_TRACKING_UTC_OFFSET_MINUTES";
pub const OUTBOX_TOPIC_VAR: &str = "CLINIC_TRACKING_OUTBOX_TOPIC";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Offset of the clinic's wall clock from UTC. Decides where a board day starts.
    pub utc_offset: FixedOffset,
    pub outbox_topic: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            utc_offset: Utc.fix(),
            outbox_topic: "clinic-tracking.v1".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(UTC_OFFSET_VAR) {
            config.utc_offset = value
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|minutes| minutes.abs() < 24 * 60)
                .and_then(|minutes| offset_from_minutes(minutes).ok())
                .ok_or_else(|| ConfigError::Invalid {
                    var: UTC_OFFSET_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(OUTBOX_TOPIC_VAR) {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    var: OUTBOX_TOPIC_VAR,
                    value,
                });
            }
            config.outbox_topic = value.trim().to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod app_config_tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[rstest]
    fn it_should_fall_back_to_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.utc_offset.local_minus_utc(), 0);
        assert_eq!(config.outbox_topic, "clinic-tracking.v1");
    }

    #[rstest]
    fn it_should_read_every_override() {
        let config = AppConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:3000"),
            (UTC_OFFSET_VAR, "240"),
            (OUTBOX_TOPIC_VAR, "front-desk"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.utc_offset.local_minus_utc(), 4 * 3600);
        assert_eq!(config.outbox_topic, "front-desk");
    }

    #[rstest]
    #[case(BIND_ADDR_VAR, "localhost")]
    #[case(UTC_OFFSET_VAR, "four hours")]
    #[case(UTC_OFFSET_VAR, "1440")]
    #[case(UTC_OFFSET_VAR, "-1500")]
    #[case(OUTBOX_TOPIC_VAR, "  ")]
    fn it_should_reject_invalid_values(#[case] var: &'static str, #[case] value: &str) {
        let result = AppConfig::from_lookup(lookup(&[(var, value)]));
        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                var,
                value: value.to_string(),
            })
        );
    }

    #[rstest]
    fn it_should_accept_a_negative_offset() {
        let config = AppConfig::from_lookup(lookup(&[(UTC_OFFSET_VAR, "-300")])).unwrap();
        assert_eq!(config.utc_offset.local_minus_utc(), -5 * 3600);
    }
}
