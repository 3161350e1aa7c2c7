//! Dual banner carousel synchronizer.
//!
//! Two carousels share one ordered slide list, advance on independent
//! autoplay timers and never show the same slide while there is more than
//! one. [`carousel::DualCarousel`] holds the state and timers,
//! [`runtime::CarouselRuntime`] drives it on tokio, and [`ui`] /
//! [`headless`] are the two bundled views.

pub mod carousel;
pub mod cli;
pub mod config;
pub mod headless;
pub mod logging;
pub mod mvi;
pub mod provider;
pub mod runtime;
pub mod shutdown;
pub mod ui;
