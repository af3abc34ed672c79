use crate::lookup::DEFAULT_DISPLAY_LIMIT;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const DATA_URL_ENV: &str = "TRAVEL_DATA_URL";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// URL or file path of the recommendations document.
    #[serde(default = "default_data_url")]
    pub data_url: String,
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: default_data_url(),
            display_limit: default_display_limit(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Applies the dataset location override, if set and non-empty.
    pub fn with_data_url_override(mut self, value: Option<String>) -> Self {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.data_url = url;
        }
        self
    }
}

fn default_data_url() -> String {
    "travel_recommendation_api.json".to_string()
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}

fn default_user_agent() -> String {
    format!("TravelScout/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value: {0}")]
    Invalid(String),
}

pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    if config.display_limit == 0 {
        return Err(ConfigError::Invalid("display_limit must be at least 1".into()));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_object_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.data_url, "travel_recommendation_api.json");
        assert_eq!(config.display_limit, 2);
    }

    #[test]
    fn explicit_values_are_kept() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"data_url":"https://example.com/data.json","display_limit":4}}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.data_url, "https://example.com/data.json");
        assert_eq!(config.display_limit, 4);
    }

    #[test]
    fn bad_json_and_missing_file_are_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "display_limit = 3").unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_config(dir.path().join("config.json")), Err(ConfigError::Io(_))));
    }

    #[test]
    fn zero_display_limit_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"display_limit":0}}"#).unwrap();
        assert!(matches!(load_config(file.path()), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn override_replaces_location_only_when_set() {
        let base = AppConfig::default();
        assert_eq!(base.clone().with_data_url_override(None).data_url, base.data_url);
        assert_eq!(base.clone().with_data_url_override(Some("  ".into())).data_url, base.data_url);
        assert_eq!(
            base.with_data_url_override(Some("data/alt.json".into())).data_url,
            "data/alt.json"
        );
    }
}
