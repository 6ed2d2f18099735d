use std::{fs, path::Path};

use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::error::ClientError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const SETTINGS_FILE: &str = "pharmacode.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base_url: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
}

impl ClientSettings {
    /// Applies a command-line override on top of file and environment values.
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_base_url = api_url;
        }
        self
    }

    pub fn base_url(&self) -> Result<Url, ClientError> {
        parse_base_url(&self.api_base_url)
    }
}

/// Defaults, then `pharmacode.toml` in the working directory, then environment.
pub fn load_settings() -> ClientSettings {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> ClientSettings {
    load_settings_with(path, |name| std::env::var(name).ok())
}

fn load_settings_with(path: &Path, lookup: impl Fn(&str) -> Option<String>) -> ClientSettings {
    let mut settings = ClientSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_base_url {
                    settings.api_base_url = v;
                }
            }
            Err(err) => {
                warn!(
                    "ignoring unreadable settings file '{}': {err}",
                    path.display()
                );
            }
        }
    }

    apply_env_overrides(&mut settings, lookup);
    settings
}

fn apply_env_overrides(settings: &mut ClientSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("PHARMACODE_API_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.to_string();
    }
    trimmed.to_string()
}

pub fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let normalized = normalize_base_url(raw);
    let url = Url::parse(&normalized).map_err(|err| ClientError::InvalidBaseUrl {
        url: normalized.clone(),
        reason: err.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientError::InvalidBaseUrl {
            url: normalized,
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
