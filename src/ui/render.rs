use crate::carousel::SlideView;
use crate::runtime::LoadStatus;
use crate::ui::app::App;
use crate::ui::layout::{carousel_panes, layout_regions};
use crate::ui::theme::{pane_border, MUTED, STATUS_ERROR, TEXT};
use crate::ui::{footer, header};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header_area, body, footer_area) = layout_regions(area);
    let snapshot = app.snapshot();

    frame.render_widget(
        header::widget(&snapshot.status, snapshot.left.slide_count),
        header_area,
    );

    let (left, right) = carousel_panes(body);
    for (view, rect) in [(&snapshot.left, left), (&snapshot.right, right)] {
        let focused = view.side == app.focus();
        frame.render_widget(slide_pane(view, focused, &snapshot.status), rect);
    }

    frame.render_widget(footer::widget(footer_area, app.focus()), footer_area);
}

fn slide_pane<'a>(view: &'a SlideView, focused: bool, status: &'a LoadStatus) -> Paragraph<'a> {
    let label_style = Style::default().fg(MUTED);
    let text_style = Style::default().fg(TEXT);

    let lines = match &view.slide {
        Some(slide) => vec![
            Line::from(Span::styled(
                format!("Slide {}", slide.id),
                text_style.add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("image   ", label_style),
                Span::styled(slide.image_url.as_str(), text_style),
            ]),
            Line::from(vec![
                Span::styled("link    ", label_style),
                Span::styled(slide.link_target.as_deref().unwrap_or("none"), text_style),
            ]),
            Line::from(vec![
                Span::styled("slide   ", label_style),
                Span::styled(view.position_label(), text_style),
            ]),
            Line::from(vec![
                Span::styled("autoplay", label_style),
                Span::styled(format!(" {}", autoplay_label(view)), text_style),
            ]),
        ],
        None => placeholder(status),
    };

    let border_color = pane_border(view.side, focused);
    let title = format!(" {} carousel ", view.side);
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .title_alignment(Alignment::Left)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
}

fn placeholder(status: &LoadStatus) -> Vec<Line<'_>> {
    match status {
        LoadStatus::Loading => vec![Line::from("Loading banners...")],
        LoadStatus::Ready => vec![Line::from("No banners to show")],
        LoadStatus::Failed { message, details } => vec![
            Line::from(Span::styled(message.as_str(), Style::default().fg(STATUS_ERROR))),
            Line::from(details.as_str()),
            Line::from(""),
            Line::from("Press r to retry"),
        ],
    }
}

fn autoplay_label(view: &SlideView) -> &'static str {
    if !view.autoplay_enabled {
        return "off";
    }
    view.phase.label()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{DualCarousel, Side, Slide, Timing};
    use crate::runtime::CarouselSnapshot;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn rendered(snapshot: CarouselSnapshot) -> String {
        let app = App::new(snapshot);
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_both_slides() {
        let mut carousel = DualCarousel::new(Timing::default(), true);
        carousel.load(
            vec![Slide::new("summer", "a.png"), Slide::new("winter", "b.png")],
            Instant::now(),
        );
        let text = rendered(CarouselSnapshot {
            left: carousel.view(Side::Left),
            right: carousel.view(Side::Right),
            status: LoadStatus::Ready,
        });
        assert!(text.contains("Slide summer"));
        assert!(text.contains("Slide winter"));
    }

    #[test]
    fn shows_retry_hint_on_failure() {
        let carousel = DualCarousel::new(Timing::default(), true);
        let text = rendered(CarouselSnapshot {
            left: carousel.view(Side::Left),
            right: carousel.view(Side::Right),
            status: LoadStatus::Failed {
                message: "Could not reach".to_string(),
                details: "boom".to_string(),
            },
        });
        assert!(text.contains("Press r to retry"));
    }
}
