use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, SourceKind};

/// Two banner carousels that never show the same slide.
#[derive(Debug, Parser)]
#[command(name = "duocarousel", version, about)]
pub struct Cli {
    /// Config file (default: ~/.config/duocarousel/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read banners from a JSON file.
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Fetch banners from this endpoint.
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Autoplay interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// How long manual navigation pauses autoplay, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub pause_ms: Option<u64>,

    /// Start with autoplay off on both sides.
    #[arg(long)]
    pub no_autoplay: bool,

    /// Log changes instead of drawing the terminal view.
    #[arg(long)]
    pub headless: bool,

    /// Stop after this many seconds (headless only).
    #[arg(long, value_name = "SECS", requires = "headless")]
    pub run_for: Option<u64>,
}

impl Cli {
    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.file {
            config.source.kind = SourceKind::File;
            config.source.path = Some(path.clone());
        }
        if let Some(url) = &self.url {
            config.source.kind = SourceKind::Http;
            config.source.url = Some(url.clone());
        }
        if let Some(interval) = self.interval_ms {
            config.carousel.autoplay_interval_ms = interval;
        }
        if let Some(pause) = self.pause_ms {
            config.carousel.pause_duration_ms = pause;
        }
        if self.no_autoplay {
            config.carousel.autoplay = false;
        }
    }
}
