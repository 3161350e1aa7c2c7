//! Two banner carousels over one slide list.
//!
//! ```text
//! SlideProvider ──→ DualCarousel ──→ SlideView (left, right)
//!                      │    ↑
//!         CarouselReducer   AutoplayScheduler
//! ```
//!
//! The sides advance independently but never show the same slide while
//! there is more than one.

mod controller;
mod intent;
mod reducer;
mod scheduler;
mod side;
mod slide;
mod state;
mod transition;
mod view;

pub use controller::{DualCarousel, SideControls};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use scheduler::{
    AutoplayPhase, AutoplayScheduler, DueTimer, Timer, TimerKind, Timing, AUTOPLAY_INTERVAL_MS,
    PAUSE_DURATION_MS,
};
pub use side::Side;
pub use slide::Slide;
pub use state::{CarouselPairState, CarouselState};
pub use transition::{compute_next, reconcile, NavRequest};
pub use view::SlideView;
