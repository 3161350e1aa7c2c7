use crate::carousel::scheduler::AutoplayPhase;
use crate::carousel::side::Side;
use crate::carousel::slide::Slide;

/// What a render surface needs to draw one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub side: Side,
    pub current_index: Option<usize>,
    pub slide: Option<Slide>,
    pub slide_count: usize,
    pub autoplay_enabled: bool,
    pub phase: AutoplayPhase,
}

impl SlideView {
    pub fn is_placeholder(&self) -> bool {
        self.slide.is_none()
    }

    /// 1-based position for display, e.g. `2/5`.
    pub fn position_label(&self) -> String {
        match self.current_index {
            Some(index) => format!("{}/{}", index + 1, self.slide_count),
            None => "-/-".to_string(),
        }
    }
}
