//! Autoplay timers for both carousels.
//!
//! Timers are plain deadlines in a per-side table. Nothing fires on its
//! own: the owner asks for [`AutoplayScheduler::next_deadline`], sleeps
//! until then and calls [`AutoplayScheduler::take_due`]. Cancelling a timer
//! removes it from the table, so a cancelled timer can never fire.

use std::time::{Duration, Instant};

use crate::carousel::side::Side;
use crate::carousel::state::CarouselState;

pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;
pub const PAUSE_DURATION_MS: u64 = 5000;

/// Autoplay durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub autoplay_interval: Duration,
    pub pause_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            autoplay_interval: Duration::from_millis(AUTOPLAY_INTERVAL_MS),
            pause_duration: Duration::from_millis(PAUSE_DURATION_MS),
        }
    }
}

/// Autoplay phase of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// Interval timer armed.
    Running,
    /// Manual navigation happened; resumes at the deadline.
    Paused { resume_at: Instant },
    /// Nothing to advance (at most one slide, or autoplay switched off).
    Idle,
}

impl AutoplayPhase {
    /// Phase a side should be in, given its state and the slide count.
    pub fn of(state: &CarouselState, len: usize) -> Self {
        if len <= 1 || !state.autoplay_enabled {
            return AutoplayPhase::Idle;
        }
        match state.pause_deadline {
            Some(resume_at) => AutoplayPhase::Paused { resume_at },
            None => AutoplayPhase::Running,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AutoplayPhase::Running => "running",
            AutoplayPhase::Paused { .. } => "paused",
            AutoplayPhase::Idle => "idle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Tick,
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub deadline: Instant,
}

/// A timer that has come due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueTimer {
    pub side: Side,
    pub kind: TimerKind,
    pub deadline: Instant,
}

/// Owned timer slots, one per side.
#[derive(Debug, Default, Clone)]
pub struct AutoplayScheduler {
    timing: Timing,
    left: Option<Timer>,
    right: Option<Timer>,
}

impl AutoplayScheduler {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            left: None,
            right: None,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn timer(&self, side: Side) -> Option<Timer> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<Timer> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Bring a side's timer in line with its phase.
    ///
    /// - `Idle` cancels whatever is armed.
    /// - `Paused` (re)arms the one-shot resume at the pause deadline,
    ///   replacing any earlier resume.
    /// - `Running` keeps an armed interval timer, otherwise arms a fresh
    ///   one from `now`.
    pub fn sync(&mut self, side: Side, phase: AutoplayPhase, now: Instant) {
        let interval = self.timing.autoplay_interval;
        let slot = self.slot_mut(side);
        let next = match (phase, *slot) {
            (AutoplayPhase::Idle, _) => None,
            (AutoplayPhase::Paused { resume_at }, _) => Some(Timer {
                kind: TimerKind::Resume,
                deadline: resume_at,
            }),
            (AutoplayPhase::Running, Some(timer)) if timer.kind == TimerKind::Tick => Some(timer),
            (AutoplayPhase::Running, _) => Some(Timer {
                kind: TimerKind::Tick,
                deadline: now + interval,
            }),
        };
        if next != *slot {
            tracing::trace!(side = %side, ?next, "autoplay timer updated");
        }
        *slot = next;
    }

    /// Re-arm an interval timer after it fired at `fired_at`.
    ///
    /// Keeps the cadence of the fired deadline unless the owner fell
    /// more than a full interval behind, in which case it restarts from `now`.
    pub fn rearm_tick(&mut self, side: Side, fired_at: Instant, now: Instant) {
        let interval = self.timing.autoplay_interval;
        let mut deadline = fired_at + interval;
        if deadline <= now {
            deadline = now + interval;
        }
        *self.slot_mut(side) = Some(Timer {
            kind: TimerKind::Tick,
            deadline,
        });
    }

    pub fn cancel(&mut self, side: Side) {
        *self.slot_mut(side) = None;
    }

    pub fn cancel_all(&mut self) {
        self.left = None;
        self.right = None;
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Earliest armed deadline across both sides.
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.left, self.right]
            .into_iter()
            .flatten()
            .map(|timer| timer.deadline)
            .min()
    }

    /// Remove and return every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<DueTimer> {
        let mut due = Vec::new();
        for side in Side::BOTH {
            let slot = self.slot_mut(side);
            if let Some(timer) = *slot {
                if timer.deadline <= now {
                    *slot = None;
                    due.push(DueTimer {
                        side,
                        kind: timer.kind,
                        deadline: timer.deadline,
                    });
                }
            }
        }
        due.sort_by_key(|timer| timer.deadline);
        due
    }
}
