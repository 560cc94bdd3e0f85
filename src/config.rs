//! Build-time Configuration
//!
//! Values baked in at compile time through environment variables,
//! since a CSR bundle has no process environment at runtime.

use tracing::Level;

/// Largest upload accepted client-side (5 MB)
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_base_url: String,
    pub log_level: Level,
    pub max_upload_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: Level::INFO,
            max_upload_bytes: MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Read `WEDDING_API_URL` and `WEDDING_LOG` as captured at build time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("WEDDING_API_URL"), option_env!("WEDDING_LOG"))
    }

    fn from_values(api_url: Option<&str>, log: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(|u| u.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            log_level: log.and_then(parse_level).unwrap_or(defaults.log_level),
            max_upload_bytes: defaults.max_upload_bytes,
        }
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    raw.trim().parse::<Level>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_upload_bytes, 5_242_880);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::from_values(Some("https://api.example.com/ "), None);
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(AppConfig::from_values(None, Some("debug")).log_level, Level::DEBUG);
        assert_eq!(AppConfig::from_values(None, Some("WARN")).log_level, Level::WARN);
        assert_eq!(AppConfig::from_values(None, Some("loud")).log_level, Level::INFO);
    }
}
