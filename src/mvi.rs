//! Model-View-Intent primitives for the carousel pair.
//!
//! ```text
//! CarouselIntent ──→ CarouselReducer ──→ CarouselPairState ──→ SlideView
//!       ↑                                                        │
//!       └──────────── timers, key presses, slide fetch ──────────┘
//! ```
//!
//! State is owned by exactly one controller. It is taken out, reduced and
//! put back on every dispatch, so no intent ever observes a half-applied
//! transition.

/// Something that happened to the carousels: a navigation request, a
/// timer expiry or a freshly fetched slide list.
pub trait Intent: Send + 'static {}

/// Plain data describing everything the views need.
///
/// `Default` is the unmounted, slide-less state; `PartialEq` lets the
/// runtime skip publishing unchanged snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects. Timers and I/O
    /// react to the returned state instead.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Take `$self.$field`, run it through `$reducer` and store the result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer as $crate::mvi::Reducer>::reduce(
            std::mem::take(&mut $self.$field),
            $intent,
        );
    };
}

pub(crate) use dispatch_mvi;
