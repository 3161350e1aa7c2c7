//! State for the carousel pair.

use std::time::Instant;

use crate::carousel::side::Side;
use crate::carousel::slide::Slide;
use crate::mvi::UiState;

/// Index state of a single carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    /// `None` exactly when there are no slides.
    pub current_index: Option<usize>,
    pub autoplay_enabled: bool,
    /// Set while manual navigation holds autoplay back.
    pub pause_deadline: Option<Instant>,
}

impl CarouselState {
    pub fn new(autoplay_enabled: bool) -> Self {
        Self {
            current_index: None,
            autoplay_enabled,
            pause_deadline: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_deadline.is_some()
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Both carousels plus the slide list they index into.
///
/// Transitions happen only in [`CarouselReducer`](crate::carousel::CarouselReducer).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselPairState {
    pub slides: Vec<Slide>,
    pub left: CarouselState,
    pub right: CarouselState,
}

impl UiState for CarouselPairState {}

impl CarouselPairState {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn side(&self, side: Side) -> &CarouselState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut CarouselState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn index(&self, side: Side) -> Option<usize> {
        self.side(side).current_index
    }

    pub fn slide(&self, side: Side) -> Option<&Slide> {
        self.index(side).and_then(|index| self.slides.get(index))
    }

    /// True when both sides point at distinct valid slides (or exclusion
    /// does not apply because there is at most one slide).
    pub fn holds_invariants(&self) -> bool {
        let len = self.len();
        let in_bounds = |index: Option<usize>| match index {
            Some(i) => i < len,
            None => len == 0,
        };
        if !in_bounds(self.left.current_index) || !in_bounds(self.right.current_index) {
            return false;
        }
        len <= 1 || self.left.current_index != self.right.current_index
    }
}
