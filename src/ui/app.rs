use crate::carousel::Side;
use crate::runtime::CarouselSnapshot;

/// View-side state of the terminal front end.
pub struct App {
    should_quit: bool,
    focus: Side,
    snapshot: CarouselSnapshot,
}

impl App {
    pub fn new(snapshot: CarouselSnapshot) -> Self {
        Self {
            should_quit: false,
            focus: Side::Left,
            snapshot,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Side that receives digit and arrow keys.
    pub fn focus(&self) -> Side {
        self.focus
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn snapshot(&self) -> &CarouselSnapshot {
        &self.snapshot
    }

    pub fn update_snapshot(&mut self, snapshot: CarouselSnapshot) {
        self.snapshot = snapshot;
    }
}
