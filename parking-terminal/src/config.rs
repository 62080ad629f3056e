use std::{fs, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;
use parking_client::ControllerConfig;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    /// Root of the parking site, endpoint paths are joined onto it.
    pub base_url: String,
    /// Raw `Cookie` header of a logged-in session; carries `csrftoken`.
    pub cookie: Option<String>,
    pub request_timeout_secs: u64,
    pub controller: ControllerConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            cookie: None,
            request_timeout_secs: 10,
            controller: ControllerConfig::default(),
        }
    }
}

impl TerminalConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid config format")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Parser, Debug)]
#[command(name = "parking-terminal", version, about = "Parking lot spot grid in the terminal")]
pub struct Args {
    /// JSON config file; built-in defaults when omitted.
    #[arg(short, long, env = "PARKING_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "PARKING_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "PARKING_COOKIE")]
    pub cookie: Option<String>,

    /// env_logger filter, e.g. `info` or `parking_client=debug`.
    #[arg(long, env = "PARKING_LOG", default_value = "warn")]
    pub log: String,
}

impl Args {
    /// Config file first, then command line overrides on top.
    pub fn resolve(&self) -> anyhow::Result<TerminalConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                TerminalConfig::from_json(&raw)?
            }
            None => TerminalConfig::default(),
        };
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(cookie) = &self.cookie {
            config.cookie = Some(cookie.clone());
        }
        Ok(config)
    }
}
