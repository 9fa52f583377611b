//! Listener configuration from the environment.
//! Used by: main.

use std::net::SocketAddr;

use crate::error::{Error, Result};

pub const ADDR_VAR: &str = "HEALTHCHECK_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = lookup(ADDR_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.into());

        let bind_addr = value
            .parse()
            .map_err(|source| Error::InvalidAddr { value, source })?;

        Ok(Self { bind_addr })
    }
}
