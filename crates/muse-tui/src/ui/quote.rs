use crate::ui::app::Screen;
use muse_core::theme::Theme;
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    style::Modifier,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

/// The quote body and attribution on the accent backdrop.
pub fn render_quote(frame: &mut Frame, area: Rect, theme: &Theme, screen: &Screen) {
    let style = match screen.background {
        Some(color) => theme.accent_surface(color),
        None => theme.text_style(),
    };

    let quote_block = Block::new()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(2))
        .style(style);
    let inner_area = quote_block.inner(area);
    frame.render_widget(quote_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Percentage(20),
        ])
        .split(inner_area);

    let quote = Paragraph::new(screen.quote.as_str())
        .style(style.add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(quote, chunks[1]);

    let attribution = Paragraph::new(screen.attribution.as_str())
        .style(style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Right);
    frame.render_widget(attribution, chunks[2]);
}
