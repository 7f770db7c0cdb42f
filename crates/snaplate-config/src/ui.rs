use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_alert_ttl_ms() -> u64 {
    5000
}

fn default_clipboard_poll_ms() -> u64 {
    500
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// How long a transient alert stays visible.
    #[serde(default = "default_alert_ttl_ms")]
    pub alert_ttl_ms: u64,
    #[serde(default = "default_clipboard_poll_ms")]
    pub clipboard_poll_ms: u64,
    /// Where "save as .txt" files land.
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

impl UiConfig {
    pub fn new() -> Self {
        let alert_ttl_ms = env::var("ALERT_TTL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_alert_ttl_ms);

        let clipboard_poll_ms = env::var("CLIPBOARD_POLL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_clipboard_poll_ms);

        let download_dir = env::var("DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_download_dir());

        UiConfig {
            alert_ttl_ms,
            clipboard_poll_ms,
            download_dir,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_ttl_ms: default_alert_ttl_ms(),
            clipboard_poll_ms: default_clipboard_poll_ms(),
            download_dir: default_download_dir(),
        }
    }
}
