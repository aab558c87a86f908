//! Runtime configuration.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `ORDER_DESK_ADDR` | `0.0.0.0:8080` | HTTP listen address |
//! | `ORDER_DESK_MAILBOX` | `64` | Desk mailbox capacity |
//! | `ORDER_DESK_DISCOUNT_MODE` | `compounding` | `compounding` or `whole-order` |
//!
//! Unset variables fall back to their default. A set but unparseable value is
//! an error rather than a silent fallback.

use crate::pricing::{DiscountMode, UnknownDiscountMode};
use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "ORDER_DESK_ADDR";
pub const MAILBOX_VAR: &str = "ORDER_DESK_MAILBOX";
pub const DISCOUNT_MODE_VAR: &str = "ORDER_DESK_DISCOUNT_MODE";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid value for ORDER_DESK_DISCOUNT_MODE: {0}")]
    DiscountMode(#[from] UnknownDiscountMode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeskConfig {
    pub addr: SocketAddr,
    pub mailbox: usize,
    pub discount_mode: DiscountMode,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            mailbox: 64,
            discount_mode: DiscountMode::default(),
        }
    }
}

impl DeskConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let addr = match lookup(ADDR_VAR) {
            Some(value) => value
                .parse::<SocketAddr>()
                .map_err(|e| invalid(ADDR_VAR, &value, e.to_string()))?,
            None => defaults.addr,
        };

        let mailbox = match lookup(MAILBOX_VAR) {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(0) => return Err(invalid(MAILBOX_VAR, &value, "must be at least 1".into())),
                Ok(n) => n,
                Err(e) => return Err(invalid(MAILBOX_VAR, &value, e.to_string())),
            },
            None => defaults.mailbox,
        };

        let discount_mode = match lookup(DISCOUNT_MODE_VAR) {
            Some(value) => value.parse::<DiscountMode>()?,
            None => defaults.discount_mode,
        };

        Ok(Self {
            addr,
            mailbox,
            discount_mode,
        })
    }
}

fn invalid(key: &'static str, value: &str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<DeskConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DeskConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), DeskConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            (ADDR_VAR, "127.0.0.1:9000"),
            (MAILBOX_VAR, "8"),
            (DISCOUNT_MODE_VAR, "whole-order"),
        ])
        .unwrap();

        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.mailbox, 8);
        assert_eq!(config.discount_mode, DiscountMode::WholeOrder);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            load(&[(MAILBOX_VAR, "0")]),
            Err(ConfigError::Invalid { key: MAILBOX_VAR, .. })
        ));
        assert!(matches!(
            load(&[(ADDR_VAR, "nowhere")]),
            Err(ConfigError::Invalid { key: ADDR_VAR, .. })
        ));
        assert_eq!(
            load(&[(DISCOUNT_MODE_VAR, "half-off")]),
            Err(ConfigError::DiscountMode(UnknownDiscountMode("half-off".into())))
        );
    }
}
