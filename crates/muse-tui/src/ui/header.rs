use crate::ui::app::Screen;
use muse_core::theme::{Element, Theme};
use ratatui::{
    prelude::{Alignment, Frame, Rect},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
};

pub fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, screen: &Screen) {
    let title = Title::from(concat!(" Muse v", env!("CARGO_PKG_VERSION"), " "))
        .alignment(Alignment::Left);

    let swatch = match screen.background {
        Some(color) => Span::styled(format!(" {color} "), theme.accent_surface(color)),
        None => Span::styled(" ------- ", theme.ratatui_style(Element::Muted)),
    };

    let line = Line::from(vec![
        Span::styled("accent ", theme.ratatui_style(Element::Muted)),
        swatch,
        Span::styled(
            format!("  theme {}", theme.variant().label()),
            theme.ratatui_style(Element::Muted),
        ),
    ]);

    let header_paragraph = Paragraph::new(line)
        .style(theme.text_style())
        .alignment(Alignment::Right)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(title)
                .title_style(theme.title_style())
                .style(theme.text_style()),
        );

    frame.render_widget(header_paragraph, area);
}
