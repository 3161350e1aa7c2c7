//! Index arithmetic shared by both carousels.
//!
//! Everything here is pure: the same inputs always give the same index.

/// A navigation request for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Next,
    Prev,
    GoTo(usize),
}

/// Compute the next index for one side.
///
/// `Next` and `Prev` step over the slide the other side is showing when
/// there is more than one slide. `GoTo` is taken as-is; a collision it
/// causes is resolved by [`reconcile`] moving the other side.
///
/// Must not be called with `len == 0`.
pub fn compute_next(current: usize, other: usize, len: usize, request: NavRequest) -> usize {
    debug_assert!(len > 0, "compute_next called without slides");
    match request {
        NavRequest::Next => {
            let candidate = (current + 1) % len;
            if len > 1 && candidate == other {
                (candidate + 1) % len
            } else {
                candidate
            }
        }
        NavRequest::Prev => {
            let candidate = (current + len - 1) % len;
            if len > 1 && candidate == other {
                (candidate + len - 1) % len
            } else {
                candidate
            }
        }
        NavRequest::GoTo(target) => target % len,
    }
}

/// Restore mutual exclusion after `moved` changed.
///
/// Returns the new index for the side that did not move: unchanged when the
/// two differ (or when there is at most one slide), otherwise shifted
/// forward by one with wraparound.
pub fn reconcile(moved: usize, stationary: usize, len: usize) -> usize {
    if len > 1 && moved == stationary {
        (stationary + 1) % len
    } else {
        stationary
    }
}
