use crate::carousel::{NavRequest, Side};
use crate::runtime::CarouselCommand;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key press to a runtime command. View-only keys (focus, quit)
/// update `app` and return `None`.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<CarouselCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return None;
    }

    let navigate = |side, request| Some(CarouselCommand::Navigate { side, request });

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.request_quit();
            None
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.toggle_focus();
            None
        }
        KeyCode::Char('a') => navigate(Side::Left, NavRequest::Prev),
        KeyCode::Char('d') => navigate(Side::Left, NavRequest::Next),
        KeyCode::Char('j') => navigate(Side::Right, NavRequest::Prev),
        KeyCode::Char('l') => navigate(Side::Right, NavRequest::Next),
        KeyCode::Left => navigate(app.focus(), NavRequest::Prev),
        KeyCode::Right => navigate(app.focus(), NavRequest::Next),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            navigate(app.focus(), NavRequest::GoTo(index))
        }
        KeyCode::Char('p') => {
            let side = app.focus();
            let enabled = !app.snapshot().view(side).autoplay_enabled;
            Some(CarouselCommand::SetAutoplay { side, enabled })
        }
        KeyCode::Char('r') => Some(CarouselCommand::Reload),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{DualCarousel, Timing};
    use crate::runtime::{CarouselSnapshot, LoadStatus};

    fn app() -> App {
        let carousel = DualCarousel::new(Timing::default(), true);
        App::new(CarouselSnapshot {
            left: carousel.view(Side::Left),
            right: carousel.view(Side::Right),
            status: LoadStatus::Loading,
        })
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letter_keys_target_fixed_sides() {
        let mut app = app();
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('d'))),
            Some(CarouselCommand::Navigate {
                side: Side::Left,
                request: NavRequest::Next
            })
        );
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('j'))),
            Some(CarouselCommand::Navigate {
                side: Side::Right,
                request: NavRequest::Prev
            })
        );
    }

    #[test]
    fn digits_go_to_slide_on_focused_side() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('3'))),
            Some(CarouselCommand::Navigate {
                side: Side::Right,
                request: NavRequest::GoTo(2)
            })
        );
    }

    #[test]
    fn p_toggles_autoplay_of_focused_side() {
        let mut app = app();
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Char('p'))),
            Some(CarouselCommand::SetAutoplay {
                side: Side::Left,
                enabled: false
            })
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(&mut app, key), None);
        assert!(app.should_quit());
    }
}
