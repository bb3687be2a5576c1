use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::screening::verdict::DEFAULT_THRESHOLD;

/// Streamlit's historical upload ceiling, kept as the default body limit.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;
const DEFAULT_EXTRACTION_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Every key is optional; invalid values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub accept_threshold: f64,
    pub max_upload_bytes: usize,
    pub extraction_timeout: Duration,
    /// JSON role catalog replacing the built-in one.
    pub role_catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            accept_threshold: DEFAULT_THRESHOLD,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            extraction_timeout: Duration::from_secs(DEFAULT_EXTRACTION_TIMEOUT_SECS),
            role_catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(v) => v
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let accept_threshold = match lookup("ACCEPT_THRESHOLD") {
            Some(v) => parse_threshold(&v)?,
            None => defaults.accept_threshold,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a non-negative integer")?,
            None => defaults.max_upload_bytes,
        };

        let extraction_timeout = match lookup("EXTRACTION_TIMEOUT_SECS") {
            Some(v) => {
                let secs = v
                    .parse::<u64>()
                    .context("EXTRACTION_TIMEOUT_SECS must be a positive integer")?;
                if secs == 0 {
                    bail!("EXTRACTION_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.extraction_timeout,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            accept_threshold,
            max_upload_bytes,
            extraction_timeout,
            role_catalog_path: lookup("ROLE_CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_threshold(raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("ACCEPT_THRESHOLD '{raw}' is not a number"))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        bail!("ACCEPT_THRESHOLD must be between 0 and 1, got {value}");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_env_empty() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.accept_threshold, 0.6);
        assert_eq!(config.max_upload_bytes, 200 * 1024 * 1024);
        assert_eq!(config.extraction_timeout, Duration::from_secs(30));
        assert!(config.role_catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "9000"),
            ("ACCEPT_THRESHOLD", "0.75"),
            ("MAX_UPLOAD_BYTES", "1024"),
            ("EXTRACTION_TIMEOUT_SECS", "5"),
            ("ROLE_CATALOG_PATH", "/etc/roles.json"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.accept_threshold, 0.75);
        assert_eq!(config.max_upload_bytes, 1024);
        assert_eq!(config.extraction_timeout, Duration::from_secs(5));
        assert_eq!(
            config.role_catalog_path,
            Some(PathBuf::from("/etc/roles.json"))
        );
    }

    #[test]
    fn test_threshold_out_of_range_is_rejected() {
        assert!(load(&[("ACCEPT_THRESHOLD", "1.5")]).is_err());
        assert!(load(&[("ACCEPT_THRESHOLD", "-0.1")]).is_err());
        assert!(load(&[("ACCEPT_THRESHOLD", "NaN")]).is_err());
        assert!(load(&[("ACCEPT_THRESHOLD", "high")]).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert!(load(&[("EXTRACTION_TIMEOUT_SECS", "0")]).is_err());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(load(&[("PORT", "70000")]).is_err());
    }
}
