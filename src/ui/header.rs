use crate::runtime::LoadStatus;
use crate::ui::theme::{MUTED, PANE_BORDER, STATUS_ERROR, STATUS_OK, STATUS_PENDING, TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the slide source status.
pub fn widget(status: &LoadStatus, slide_count: usize) -> Paragraph<'static> {
    let text_style = Style::default().fg(TEXT);
    let (label, color) = match status {
        LoadStatus::Loading => ("Loading banners".to_string(), STATUS_PENDING),
        LoadStatus::Ready if slide_count == 1 => ("1 slide".to_string(), STATUS_OK),
        LoadStatus::Ready => (format!("{slide_count} slides"), STATUS_OK),
        LoadStatus::Failed { message, .. } => (message.clone(), STATUS_ERROR),
    };
    let line = Line::from(vec![
        Span::styled("  ● ", Style::default().fg(color)),
        Span::styled("Banners", text_style),
        Span::styled("  │  ", Style::default().fg(MUTED)),
        Span::styled(label, text_style),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(PANE_BORDER)),
    )
}
