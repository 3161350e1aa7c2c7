use ratatui::style::Color;

use crate::carousel::Side;

pub const LEFT_ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const RIGHT_ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const PANE_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_PENDING: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

/// Border colour of a carousel pane; unfocused panes stay neutral.
pub fn pane_border(side: Side, focused: bool) -> Color {
    match (side, focused) {
        (_, false) => PANE_BORDER,
        (Side::Left, true) => LEFT_ACCENT,
        (Side::Right, true) => RIGHT_ACCENT,
    }
}
