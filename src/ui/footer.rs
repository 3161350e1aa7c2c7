use crate::carousel::Side;
use crate::ui::theme::{pane_border, MUTED, PANE_BORDER, TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const KEY_HINTS: &[(&str, &str)] = &[
    ("a/d", "Left"),
    ("j/l", "Right"),
    ("Tab", "Focus"),
    ("1-9", "Go to"),
    ("p", "Autoplay"),
    ("r", "Reload"),
    ("q", "Quit"),
];

/// Key hints on the left, focused side and version on the right.
pub fn widget(area: Rect, focus: Side) -> Paragraph<'static> {
    let key_style = Style::default().fg(TEXT);
    let text_style = Style::default().fg(MUTED);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", text_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(": {action}"), text_style));
    }

    let focus_label = format!("focus: {focus}");
    let version = format!("v{VERSION} ");
    // Char counts, not bytes: the separators are multi-byte.
    let used: usize = spans.iter().map(|span| span.content.chars().count()).sum::<usize>()
        + focus_label.chars().count()
        + 3
        + version.chars().count();
    let padding = (area.width.saturating_sub(2) as usize).saturating_sub(used);

    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        focus_label,
        Style::default()
            .fg(pane_border(focus, true))
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(" │ ", text_style));
    spans.push(Span::styled(version, text_style));

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANE_BORDER)),
    )
}
