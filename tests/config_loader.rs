mod common;

use std::path::PathBuf;
use std::time::Duration;

use common::temp_config;
use duocarousel::config::{Config, ConfigError, SourceKind};

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from(&PathBuf::from("/nonexistent/duocarousel.toml")).unwrap();
    assert_eq!(config.carousel.autoplay_interval_ms, 5000);
    assert_eq!(config.carousel.pause_duration_ms, 5000);
    assert!(config.carousel.autoplay);
    assert_eq!(config.source.kind, SourceKind::Inline);
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn empty_file_yields_defaults() {
    let (_dir, path) = temp_config("");
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.carousel.timing().autoplay_interval, Duration::from_secs(5));
    assert_eq!(config.source.timeout_seconds, 10);
}

#[test]
fn parses_full_config() {
    let (_dir, path) = temp_config(
        r#"
[carousel]
autoplay_interval_ms = 3000
pause_duration_ms = 8000
autoplay = false

[source]
kind = "http"
url = "https://shop.example/api/banners"
timeout_seconds = 4

[ui]
tick_rate_ms = 100
"#,
    );

    let config = Config::load_from(&path).unwrap();
    let timing = config.carousel.timing();
    assert_eq!(timing.autoplay_interval, Duration::from_millis(3000));
    assert_eq!(timing.pause_duration, Duration::from_millis(8000));
    assert!(!config.carousel.autoplay);
    assert_eq!(config.source.kind, SourceKind::Http);
    assert_eq!(
        config.source.url.as_deref(),
        Some("https://shop.example/api/banners")
    );
    assert_eq!(config.source.timeout_seconds, 4);
    assert_eq!(config.ui.tick_rate_ms, 100);
}

#[test]
fn parses_inline_slides() {
    let (_dir, path) = temp_config(
        r#"
[source]
kind = "inline"

[[source.slides]]
id = 10
imageUrl = "https://cdn.example/10.png"
linkTarget = "/new"

[[source.slides]]
id = "b"
image_url = "https://cdn.example/b.png"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    let slides = &config.source.slides;
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].id, "10");
    assert_eq!(slides[0].link_target.as_deref(), Some("/new"));
    assert_eq!(slides[1].image_url, "https://cdn.example/b.png");
}

#[test]
fn rejects_invalid_toml() {
    let (_dir, path) = temp_config("[carousel\nautoplay = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn rejects_zero_interval() {
    let (_dir, path) = temp_config("[carousel]\nautoplay_interval_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("autoplay_interval_ms"));
}

#[test]
fn rejects_zero_pause() {
    let (_dir, path) = temp_config("[carousel]\npause_duration_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn file_source_requires_path() {
    let (_dir, path) = temp_config("[source]\nkind = \"file\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("source.path"));
}

#[test]
fn http_source_requires_http_url() {
    let (_dir, path) = temp_config("[source]\nkind = \"http\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));

    let (_dir, path) = temp_config("[source]\nkind = \"http\"\nurl = \"ftp://shop.example\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("not an http(s) URL"));
}

#[test]
fn unknown_source_kind_is_a_parse_error() {
    let (_dir, path) = temp_config("[source]\nkind = \"carrier-pigeon\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}
