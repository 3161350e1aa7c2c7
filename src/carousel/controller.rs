//! The carousel pair controller.
//!
//! Owns the pair state and the timer table. Every index change goes through
//! [`CarouselReducer`]; every timer change goes through
//! [`AutoplayScheduler::sync`]. Callers pass the current instant in, which
//! keeps the controller free of clocks and lets tests drive time directly.

use std::time::Instant;

use crate::carousel::intent::CarouselIntent;
use crate::carousel::reducer::CarouselReducer;
use crate::carousel::scheduler::{AutoplayPhase, AutoplayScheduler, DueTimer, TimerKind, Timing};
use crate::carousel::side::Side;
use crate::carousel::slide::Slide;
use crate::carousel::state::CarouselPairState;
use crate::carousel::transition::NavRequest;
use crate::carousel::view::SlideView;
use crate::mvi::dispatch_mvi;

#[derive(Debug)]
pub struct DualCarousel {
    state: CarouselPairState,
    scheduler: AutoplayScheduler,
    mounted: bool,
}

impl DualCarousel {
    /// Mount a controller with no slides yet. Both sides start in the
    /// placeholder state with autoplay set to `autoplay`.
    pub fn new(timing: Timing, autoplay: bool) -> Self {
        let mut state = CarouselPairState::default();
        state.left.autoplay_enabled = autoplay;
        state.right.autoplay_enabled = autoplay;
        Self {
            state,
            scheduler: AutoplayScheduler::new(timing),
            mounted: true,
        }
    }

    pub fn state(&self) -> &CarouselPairState {
        &self.state
    }

    pub fn scheduler(&self) -> &AutoplayScheduler {
        &self.scheduler
    }

    pub fn timing(&self) -> Timing {
        self.scheduler.timing()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn slide_count(&self) -> usize {
        self.state.len()
    }

    pub fn index(&self, side: Side) -> Option<usize> {
        self.state.index(side)
    }

    pub fn phase(&self, side: Side) -> AutoplayPhase {
        AutoplayPhase::of(self.state.side(side), self.state.len())
    }

    pub fn view(&self, side: Side) -> SlideView {
        let carousel = self.state.side(side);
        SlideView {
            side,
            current_index: carousel.current_index,
            slide: self.state.slide(side).cloned(),
            slide_count: self.state.len(),
            autoplay_enabled: carousel.autoplay_enabled,
            phase: self.phase(side),
        }
    }

    /// Borrow the manual controls of one side.
    pub fn controls(&mut self, side: Side) -> SideControls<'_> {
        SideControls {
            carousel: self,
            side,
        }
    }

    /// Install a freshly fetched slide list. Cancels every timer armed for
    /// the previous list before arming new ones.
    pub fn load(&mut self, slides: Vec<Slide>, now: Instant) {
        if !self.mounted {
            return;
        }
        let count = slides.len();
        dispatch_mvi!(self, state, CarouselReducer, CarouselIntent::Load { slides });
        self.scheduler.cancel_all();
        self.sync_timers(now);
        tracing::info!(
            slides = count,
            left = ?self.state.left.current_index,
            right = ?self.state.right.current_index,
            "carousel slides loaded"
        );
    }

    pub fn go_next(&mut self, side: Side, now: Instant) {
        self.navigate(side, NavRequest::Next, now);
    }

    pub fn go_previous(&mut self, side: Side, now: Instant) {
        self.navigate(side, NavRequest::Prev, now);
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, side: Side, index: usize, now: Instant) {
        self.navigate(side, NavRequest::GoTo(index), now);
    }

    fn navigate(&mut self, side: Side, request: NavRequest, now: Instant) {
        if !self.mounted || self.state.is_empty() {
            return;
        }
        if let NavRequest::GoTo(target) = request {
            if target >= self.state.len() {
                tracing::debug!(side = %side, target, slides = self.state.len(), "goto rejected");
                return;
            }
        }

        let pause_until = now + self.scheduler.timing().pause_duration;
        dispatch_mvi!(
            self,
            state,
            CarouselReducer,
            CarouselIntent::Navigate {
                side,
                request,
                pause_until,
            }
        );
        self.sync_side(side, now);
        tracing::debug!(
            side = %side,
            ?request,
            left = ?self.state.left.current_index,
            right = ?self.state.right.current_index,
            "manual navigation"
        );
    }

    pub fn set_autoplay(&mut self, side: Side, enabled: bool, now: Instant) {
        if !self.mounted {
            return;
        }
        dispatch_mvi!(
            self,
            state,
            CarouselReducer,
            CarouselIntent::SetAutoplay { side, enabled }
        );
        self.sync_side(side, now);
    }

    /// Earliest instant at which [`fire_due`](Self::fire_due) has work.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Run every timer that is due at `now` and return the ones that fired.
    pub fn fire_due(&mut self, now: Instant) -> Vec<DueTimer> {
        if !self.mounted {
            return Vec::new();
        }
        let due = self.scheduler.take_due(now);
        for timer in &due {
            match timer.kind {
                TimerKind::Tick => {
                    dispatch_mvi!(
                        self,
                        state,
                        CarouselReducer,
                        CarouselIntent::Tick { side: timer.side }
                    );
                    self.scheduler.rearm_tick(timer.side, timer.deadline, now);
                    tracing::debug!(
                        side = %timer.side,
                        left = ?self.state.left.current_index,
                        right = ?self.state.right.current_index,
                        "autoplay tick"
                    );
                }
                TimerKind::Resume => {
                    dispatch_mvi!(
                        self,
                        state,
                        CarouselReducer,
                        CarouselIntent::Resume { side: timer.side }
                    );
                    self.sync_side(timer.side, now);
                    tracing::debug!(side = %timer.side, "autoplay resumed");
                }
            }
        }
        due
    }

    /// Tear down: cancel every timer and drop the slides. Later calls are no-ops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.scheduler.cancel_all();
        self.state = CarouselPairState::default();
        self.mounted = false;
        tracing::debug!("carousel unmounted");
    }

    fn sync_timers(&mut self, now: Instant) {
        for side in Side::BOTH {
            self.sync_side(side, now);
        }
    }

    fn sync_side(&mut self, side: Side, now: Instant) {
        let phase = self.phase(side);
        self.scheduler.sync(side, phase, now);
    }
}

/// Manual controls for one side, borrowed from a [`DualCarousel`].
pub struct SideControls<'a> {
    carousel: &'a mut DualCarousel,
    side: Side,
}

impl SideControls<'_> {
    pub fn go_next(&mut self, now: Instant) {
        self.carousel.go_next(self.side, now);
    }

    pub fn go_previous(&mut self, now: Instant) {
        self.carousel.go_previous(self.side, now);
    }

    pub fn go_to(&mut self, index: usize, now: Instant) {
        self.carousel.go_to(self.side, index, now);
    }

    pub fn view(&self) -> SlideView {
        self.carousel.view(self.side)
    }
}
