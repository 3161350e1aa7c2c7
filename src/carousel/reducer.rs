//! Reducer for the carousel pair.

use std::time::Instant;

use crate::carousel::intent::CarouselIntent;
use crate::carousel::side::Side;
use crate::carousel::state::{CarouselPairState, CarouselState};
use crate::carousel::transition::{compute_next, reconcile, NavRequest};
use crate::mvi::Reducer;

/// Reducer for carousel index transitions.
///
/// Pure function. Timer bookkeeping happens in the scheduler, which reads
/// the resulting `pause_deadline` and `autoplay_enabled` flags.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselPairState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CarouselIntent::Load { slides } => {
                let last = slides.len().checked_sub(1);
                CarouselPairState {
                    left: CarouselState {
                        current_index: last.map(|_| 0),
                        autoplay_enabled: state.left.autoplay_enabled,
                        pause_deadline: None,
                    },
                    right: CarouselState {
                        current_index: last,
                        autoplay_enabled: state.right.autoplay_enabled,
                        pause_deadline: None,
                    },
                    slides,
                }
            }

            CarouselIntent::Navigate {
                side,
                request,
                pause_until,
            } => {
                if let NavRequest::GoTo(target) = request {
                    if target >= state.len() {
                        return state;
                    }
                }
                let mut state = step(state, side, request);
                pause(&mut state, side, pause_until);
                state
            }

            CarouselIntent::Tick { side } => {
                if state.len() <= 1 || state.side(side).is_paused() {
                    return state;
                }
                step(state, side, NavRequest::Next)
            }

            CarouselIntent::Resume { side } => {
                let mut state = state;
                state.side_mut(side).pause_deadline = None;
                state
            }

            CarouselIntent::SetAutoplay { side, enabled } => {
                let mut state = state;
                let carousel = state.side_mut(side);
                carousel.autoplay_enabled = enabled;
                if !enabled {
                    carousel.pause_deadline = None;
                }
                state
            }
        }
    }
}

/// Move `side`, then push the other side off a collision.
fn step(mut state: CarouselPairState, side: Side, request: NavRequest) -> CarouselPairState {
    let len = state.len();
    let (Some(current), Some(other)) = (state.index(side), state.index(side.other())) else {
        return state;
    };

    let moved = compute_next(current, other, len, request);
    let stationary = reconcile(moved, other, len);
    state.side_mut(side).current_index = Some(moved);
    state.side_mut(side.other()).current_index = Some(stationary);
    state
}

fn pause(state: &mut CarouselPairState, side: Side, until: Instant) {
    let len = state.len();
    let carousel = state.side_mut(side);
    if len > 1 && carousel.autoplay_enabled {
        carousel.pause_deadline = Some(until);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::slide::Slide;
    use std::time::Duration;

    fn slides(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("s{i}"), format!("https://cdn/{i}.png")))
            .collect()
    }

    fn loaded(n: usize) -> CarouselPairState {
        CarouselReducer::reduce(
            CarouselPairState::default(),
            CarouselIntent::Load { slides: slides(n) },
        )
    }

    fn navigate(side: Side, request: NavRequest) -> CarouselIntent {
        CarouselIntent::Navigate {
            side,
            request,
            pause_until: Instant::now() + Duration::from_secs(5),
        }
    }

    #[test]
    fn load_places_sides_apart() {
        let state = loaded(4);
        assert_eq!(state.index(Side::Left), Some(0));
        assert_eq!(state.index(Side::Right), Some(3));
    }

    #[test]
    fn load_empty_leaves_no_index() {
        let state = loaded(0);
        assert_eq!(state.index(Side::Left), None);
        assert_eq!(state.index(Side::Right), None);
    }

    #[test]
    fn load_keeps_autoplay_flags() {
        let state = CarouselReducer::reduce(
            CarouselPairState::default(),
            CarouselIntent::SetAutoplay {
                side: Side::Right,
                enabled: false,
            },
        );
        let state = CarouselReducer::reduce(state, CarouselIntent::Load { slides: slides(3) });
        assert!(state.left.autoplay_enabled);
        assert!(!state.right.autoplay_enabled);
    }

    #[test]
    fn goto_collision_moves_other_side() {
        let state = loaded(4);
        let state = CarouselReducer::reduce(state, navigate(Side::Left, NavRequest::GoTo(3)));
        assert_eq!(state.index(Side::Left), Some(3));
        assert_eq!(state.index(Side::Right), Some(0));
    }

    #[test]
    fn goto_out_of_range_is_noop() {
        let state = loaded(3);
        let new = CarouselReducer::reduce(state.clone(), navigate(Side::Left, NavRequest::GoTo(5)));
        assert_eq!(new, state);
    }

    #[test]
    fn navigate_sets_pause_deadline() {
        let state = CarouselReducer::reduce(loaded(3), navigate(Side::Left, NavRequest::Next));
        assert!(state.left.is_paused());
        assert!(!state.right.is_paused());
    }

    #[test]
    fn navigate_single_slide_does_not_pause() {
        let state = CarouselReducer::reduce(loaded(1), navigate(Side::Left, NavRequest::Next));
        assert_eq!(state.index(Side::Left), Some(0));
        assert!(!state.left.is_paused());
    }

    #[test]
    fn tick_ignored_while_paused() {
        let state = CarouselReducer::reduce(loaded(5), navigate(Side::Left, NavRequest::Next));
        let before = state.index(Side::Left);
        let state = CarouselReducer::reduce(state, CarouselIntent::Tick { side: Side::Left });
        assert_eq!(state.index(Side::Left), before);
    }

    #[test]
    fn resume_clears_pause() {
        let state = CarouselReducer::reduce(loaded(3), navigate(Side::Right, NavRequest::Prev));
        let state = CarouselReducer::reduce(state, CarouselIntent::Resume { side: Side::Right });
        assert!(!state.right.is_paused());
    }

    #[test]
    fn disabling_autoplay_clears_pause() {
        let state = CarouselReducer::reduce(loaded(3), navigate(Side::Left, NavRequest::Next));
        let state = CarouselReducer::reduce(
            state,
            CarouselIntent::SetAutoplay {
                side: Side::Left,
                enabled: false,
            },
        );
        assert!(!state.left.autoplay_enabled);
        assert!(!state.left.is_paused());
    }
}
