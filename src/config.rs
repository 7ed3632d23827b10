use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::logging::LogConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Replaces `https://{routing}.api.riotgames.com` with `{base}/{routing}` when set.
    pub riot_api_base_url: Option<String>,
    pub riot_request_timeout: Option<Duration>,
    pub log: LogConfig,
}

impl Config {
    /// Loads `.env` (a missing file is fine) before reading anything, so every
    /// setting including logging can come from it.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        const DEFAULT_HOST: &str = "0.0.0.0";
        const DEFAULT_PORT: u16 = 3000;
        const DEFAULT_STATIC_DIR: &str = "public";

        let riot_api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = lookup("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let riot_api_base_url = lookup("RIOT_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let riot_request_timeout = lookup("RIOT_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let log = LogConfig::from_lookup(&lookup);

        Ok(Self {
            riot_api_key,
            host,
            port,
            static_dir,
            riot_api_base_url,
            riot_request_timeout,
            log,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
