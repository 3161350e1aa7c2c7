//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_banners;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use duocarousel::carousel::{DualCarousel, Side, Slide, Timing};
use tempfile::TempDir;

pub const INTERVAL: Duration = Duration::from_millis(5000);
pub const PAUSE: Duration = Duration::from_millis(5000);

/// `n` distinct slides with ids `s0..s{n-1}`.
pub fn slides(n: usize) -> Vec<Slide> {
    (0..n)
        .map(|i| Slide::new(format!("s{i}"), format!("https://cdn.example/banner-{i}.png")))
        .collect()
}

/// A mounted carousel with `n` slides loaded at `now`.
pub fn loaded(n: usize, now: Instant) -> DualCarousel {
    let mut carousel = DualCarousel::new(Timing::default(), true);
    carousel.load(slides(n), now);
    carousel
}

pub fn indices(carousel: &DualCarousel) -> (Option<usize>, Option<usize>) {
    (carousel.index(Side::Left), carousel.index(Side::Right))
}

/// Both sides valid and distinct (when more than one slide).
pub fn assert_invariants(carousel: &DualCarousel) {
    let n = carousel.slide_count();
    let (left, right) = indices(carousel);
    if n == 0 {
        assert_eq!((left, right), (None, None));
        return;
    }
    let (left, right) = (left.expect("left index"), right.expect("right index"));
    assert!(left < n, "left index {left} out of bounds for {n} slides");
    assert!(right < n, "right index {right} out of bounds for {n} slides");
    if n > 1 {
        assert_ne!(left, right, "both sides show slide {left}");
    }
    assert!(carousel.state().holds_invariants());
}

/// Write a JSON slide file into a fresh temp dir.
pub fn temp_slide_file(json: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("banners.json");
    std::fs::write(&path, json).expect("Failed to write slide file");
    (temp_dir, path)
}

/// Write a config file into a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}
