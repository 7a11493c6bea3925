//! Front-end settings: defaults, then a TOML file, then environment overrides.

use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::{SolverClient, DEFAULT_REQUEST_TIMEOUT, DEFAULT_SERVER_URL};

pub const CONFIG_FILE_NAME: &str = "rufix.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub server_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn build_client(&self) -> Result<SolverClient> {
        SolverClient::new(&self.server_url, self.request_timeout())
    }
}

/// Loads settings from `explicit` when given (a missing file is an error),
/// otherwise from the first existing path in `fallbacks`, then applies
/// `RUFIX_*` environment overrides.
pub fn load_settings(explicit: Option<&Path>, fallbacks: &[PathBuf]) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => read_settings_file(path)?
            .with_context(|| format!("config file '{}' does not exist", path.display()))?,
        None => {
            let mut found = None;
            for path in fallbacks {
                if let Some(settings) = read_settings_file(path)? {
                    tracing::debug!(path = %path.display(), "loaded settings file");
                    found = Some(settings);
                    break;
                }
            }
            found.unwrap_or_default()
        }
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<Option<Settings>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };
    let settings = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    Ok(Some(settings))
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("RUFIX_SERVER_URL").filter(|v| !v.trim().is_empty()) {
        settings.server_url = v.trim().to_string();
    }

    if let Some(v) = lookup("RUFIX_REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(err) => tracing::warn!("ignoring RUFIX_REQUEST_TIMEOUT_SECS={v:?}: {err}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
