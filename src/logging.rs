//! Log subscriber setup for hosts.
//!
//! The library only emits `tracing` events; hosts that have no subscriber of
//! their own can call [`init`] once at startup.

use crate::config::LogConfig;
use crate::error::{EngineRegistryError, Result};
use std::env::{self, VarError};
use tracing_subscriber::EnvFilter;

/// Parse `EnvFilter` directives such as `"info,engine_registry=debug"`.
pub fn parse_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| EngineRegistryError::LogFilter {
        filter: directives.to_string(),
        message: e.to_string(),
    })
}

/// Pick the filter to install.
///
/// `env` is the value of `RUST_LOG`, if set. It wins over `config.filter`, and
/// a malformed value is an error rather than a silent fallback.
pub fn resolve_filter(env: Option<&str>, config: &LogConfig) -> Result<EnvFilter> {
    match env {
        Some(directives) => parse_filter(directives),
        None => parse_filter(&config.filter),
    }
}

/// Install a global compact subscriber.
///
/// `RUST_LOG` overrides `config.filter` when set. Fails if either filter is
/// malformed or a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<()> {
    let env = match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(value)) => {
            return Err(EngineRegistryError::LogFilter {
                filter: value.to_string_lossy().into_owned(),
                message: format!("{} is not valid unicode", EnvFilter::DEFAULT_ENV),
            })
        }
    };

    install(resolve_filter(env.as_deref(), config)?, config.ansi)
}

/// Like [`init`], but only `config.filter` is used and `RUST_LOG` is ignored.
pub fn init_ignoring_env(config: &LogConfig) -> Result<()> {
    install(resolve_filter(None, config)?, config.ansi)
}

fn install(filter: EnvFilter, ansi: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_ansi(ansi)
        .compact()
        .try_init()
        .map_err(|e| EngineRegistryError::Subscriber(e.to_string()))
}
