use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_VERIFY_SCHEMA: &str = "CATALOG_READER_VERIFY_SCHEMA";
pub const ENV_LOG_ERRORS: &str = "CATALOG_READER_LOG_ERRORS";

/// Reader behaviour switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Compare a view's ordinal table with the cursor's column metadata before reading.
    pub verify_schema: bool,
    /// Log cursor failures through `tracing` before propagating them.
    pub log_errors: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { verify_schema: false, log_errors: true }
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("{}: expected a boolean flag, got '{}'", name, other)),
    }
}

impl ReaderConfig {
    /// Defaults overridden by `CATALOG_READER_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_VERIFY_SCHEMA) {
            cfg.verify_schema = parse_flag(ENV_VERIFY_SCHEMA, &v)?;
        }
        if let Some(v) = lookup(ENV_LOG_ERRORS) {
            cfg.log_errors = parse_flag(ENV_LOG_ERRORS, &v)?;
        }
        Ok(cfg)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading reader config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("parsing reader config {}", path.display()))
    }

    pub fn verifying(mut self) -> Self {
        self.verify_schema = true;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.log_errors = false;
        self
    }
}
