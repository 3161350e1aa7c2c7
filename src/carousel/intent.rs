use std::time::Instant;

use crate::carousel::side::Side;
use crate::carousel::slide::Slide;
use crate::carousel::transition::NavRequest;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CarouselIntent {
    /// Slide list resolved. Places left on the first slide and right on the last.
    Load { slides: Vec<Slide> },
    /// Manual navigation. `pause_until` becomes the side's pause deadline
    /// when autoplay applies.
    Navigate {
        side: Side,
        request: NavRequest,
        pause_until: Instant,
    },
    /// Autoplay interval elapsed for a side.
    Tick { side: Side },
    /// Pause deadline elapsed for a side.
    Resume { side: Side },
    SetAutoplay { side: Side, enabled: bool },
}

impl Intent for CarouselIntent {}
