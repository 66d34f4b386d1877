use crate::ui::app::Screen;
use muse_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Key hints, plus the "new quote" control when there is one.
pub fn render_footer(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    screen: &Screen,
    control: Option<char>,
) {
    let footer_block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .style(theme.text_style());

    let inner_area = footer_block.inner(area);

    let mut spans = match (control, screen.control) {
        (Some(key), Some(color)) => vec![Span::styled(
            format!(" [{}] New quote ", key.to_ascii_uppercase()),
            theme.accent_surface(color),
        )],
        (Some(key), None) => vec![Span::raw(format!("[{}] New quote", key.to_ascii_uppercase()))],
        (None, _) => vec![Span::styled(
            "display only",
            theme.ratatui_style(Element::Warning),
        )],
    };
    spans.extend([
        Span::raw(" | "),
        Span::raw("[T]"),
        Span::styled("heme", theme.ratatui_style(Element::Muted)),
        Span::raw(" | "),
        Span::raw("[Q]"),
        Span::styled("uit", theme.ratatui_style(Element::Muted)),
    ]);

    let footer_paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(theme.text_style());

    frame.render_widget(footer_block, area);
    frame.render_widget(footer_paragraph, inner_area);
}
