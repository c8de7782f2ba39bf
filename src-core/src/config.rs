//! Application settings.
//!
//! - `default_config()` - settings embedded in the binary
//! - `load_config(path)` - settings from a TOML file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Embedded copy of `src-core/config/app.toml`.
const DEFAULT_CONFIG: &str = include_str!("../config/app.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Shared code compared by the login gate
    pub access_code: String,
    /// Wrap every page except `/login` in the auth guard
    #[serde(default = "default_true")]
    pub require_login: bool,
    /// `EnvFilter` directive for console logging
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub typing_delay_ms: u32,
    pub booking_delay_ms: u32,
    pub capture_delay_ms: u32,
    pub offer_countdown_secs: u32,
    pub session_minutes: u32,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load settings from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {:?}", path))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Invalid config at {:?}", path))?;
    Ok(config)
}

/// Settings embedded at compile time.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug, covered by tests).
pub fn default_config() -> AppConfig {
    toml::from_str(DEFAULT_CONFIG).expect("embedded app.toml must be valid TOML")
}

impl Default for AppConfig {
    fn default() -> Self {
        default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.access_code, "sbg123");
        assert!(config.require_login);
        assert_eq!(config.typing_delay_ms, 1500);
        assert_eq!(config.offer_countdown_secs, 300);
        assert_eq!(config.session_minutes, 30);
    }

    #[test]
    fn test_load_config_from_file_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
access_code = "letmein"
typing_delay_ms = 10
booking_delay_ms = 10
capture_delay_ms = 10
offer_countdown_secs = 60
session_minutes = 45
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.access_code, "letmein");
        assert!(config.require_login);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.session_minutes, 45);
    }

    #[test]
    fn test_load_config_rejects_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "access_code = \"x\"").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
