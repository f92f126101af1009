use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default — the service runs with no env set at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Hard cap on the request body, which bounds both uploads together.
    pub max_upload_bytes: usize,
    /// Default "great match" cutoff when the request does not supply one.
    pub threshold_good: f64,
    /// Default "moderate match" cutoff when the request does not supply one.
    pub threshold_ok: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            threshold_good: parse_threshold("THRESHOLD_GOOD", 0.7)?,
            threshold_ok: parse_threshold("THRESHOLD_OK", 0.4)?,
        };

        if config.threshold_ok > config.threshold_good {
            anyhow::bail!(
                "THRESHOLD_OK ({}) must not exceed THRESHOLD_GOOD ({})",
                config.threshold_ok,
                config.threshold_good
            );
        }

        Ok(config)
    }
}

fn parse_threshold(key: &str, default: f64) -> Result<f64> {
    let value = match std::env::var(key) {
        Ok(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("{key} must be a number"))?,
        Err(_) => default,
    };
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("{key} must be within [0.0, 1.0], got {value}");
    }
    Ok(value)
}
