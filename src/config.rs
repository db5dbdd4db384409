use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::backend::client::DEFAULT_BACKEND_URL;

/// Default number of records a renderer shows.
pub const DEFAULT_MAX_VISIBLE: usize = 25;

/// Default request timeout. The report endpoint waits on a language model.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the asteroid backend (NEO_BACKEND_URL).
    pub backend_url: String,
    /// Default renderer limit (NEO_MAX_VISIBLE).
    pub max_visible: usize,
    /// Per-request timeout (NEO_REQUEST_TIMEOUT_SECS).
    pub request_timeout: Duration,
    /// Where briefs and reports are written (NEO_OUTPUT_DIR).
    pub output_dir: String,
}

impl Config {
    /// Load configuration from environment variables, applying defaults.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a fixed map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_visible = match lookup("NEO_MAX_VISIBLE") {
            Some(raw) => {
                let n: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("NEO_MAX_VISIBLE must be a number, got {raw:?}"))?;
                if n == 0 {
                    anyhow::bail!("NEO_MAX_VISIBLE must be at least 1");
                }
                n
            }
            None => DEFAULT_MAX_VISIBLE,
        };

        let timeout_secs = match lookup("NEO_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().with_context(|| {
                format!("NEO_REQUEST_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}")
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            backend_url: lookup("NEO_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            max_visible,
            request_timeout: Duration::from_secs(timeout_secs),
            output_dir: lookup("NEO_OUTPUT_DIR").unwrap_or_else(|| "output".to_string()),
        })
    }

    /// Check that the backend URL is usable.
    /// Call this before any operation that talks to the backend.
    pub fn require_backend(&self) -> Result<()> {
        if self.backend_url.trim().is_empty() {
            anyhow::bail!(
                "NEO_BACKEND_URL is empty. Set it in your .env file\n\
                 (default is {DEFAULT_BACKEND_URL})."
            );
        }
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            anyhow::bail!(
                "NEO_BACKEND_URL must start with http:// or https://, got {}",
                self.backend_url
            );
        }
        Ok(())
    }

    /// Path of a file inside the output directory.
    pub fn output_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.output_dir.trim_end_matches('/'), file_name)
    }
}
