use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::{Slide, Timing, AUTOPLAY_INTERVAL_MS, PAUSE_DURATION_MS};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Autoplay behaviour shared by both carousels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Delay between automatic advances in milliseconds (default: 5000).
    #[serde(default = "default_autoplay_interval_ms")]
    pub autoplay_interval_ms: u64,
    /// How long manual navigation suspends autoplay in milliseconds (default: 5000).
    #[serde(default = "default_pause_duration_ms")]
    pub pause_duration_ms: u64,
    /// Whether both sides start with autoplay on (default: true).
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
}

impl CarouselConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            autoplay_interval: Duration::from_millis(self.autoplay_interval_ms),
            pause_duration: Duration::from_millis(self.pause_duration_ms),
        }
    }
}

/// Where the banner list comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// JSON file on disk.
    File,
    /// Banner endpoint of the storefront API.
    Http,
    /// Slides listed directly in this config file.
    Inline,
}

/// Slide list provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_kind")]
    pub kind: SourceKind,
    /// JSON file path, required for `kind = "file"`.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Banner endpoint URL, required for `kind = "http"`.
    #[serde(default)]
    pub url: Option<String>,
    /// HTTP request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
    /// Slides for `kind = "inline"`.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// Terminal view settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_autoplay_interval_ms() -> u64 {
    AUTOPLAY_INTERVAL_MS
}

fn default_pause_duration_ms() -> u64 {
    PAUSE_DURATION_MS
}

fn default_autoplay() -> bool {
    true
}

fn default_source_kind() -> SourceKind {
    SourceKind::Inline
}

fn default_timeout_seconds() -> u32 {
    10
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: default_autoplay_interval_ms(),
            pause_duration_ms: default_pause_duration_ms(),
            autoplay: default_autoplay(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: default_source_kind(),
            path: None,
            url: None,
            timeout_seconds: default_timeout_seconds(),
            slides: Vec::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
