use super::{footer::render_footer, header::render_header, quote::render_quote};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use muse_core::{
    color::Color,
    presenter::{Presenter, Update, View},
    settings::Settings,
    theme::{Element, Theme},
};
use ratatui::{
    prelude::{Backend, Constraint, Direction, Layout, Terminal},
    widgets::{Block, Borders},
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What the presenter last wrote. Rendering reads only from here.
#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub quote: String,
    pub attribution: String,
    pub background: Option<Color>,
    pub control: Option<Color>,
}

impl View for Screen {
    fn show_quote(&mut self, text: &str, attribution: &str) {
        self.quote = text.to_string();
        self.attribution = attribution.to_string();
    }

    fn paint_background(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn paint_control(&mut self, color: Color) {
        self.control = Some(color);
    }
}

pub struct App {
    should_quit: bool,
    started: bool,
    theme: Theme,
    settings: Settings,
    config_path: Option<PathBuf>,
    presenter: Presenter,
    control: Option<char>,
    screen: Screen,
    last: Option<Update>,
}

impl App {
    pub fn new(settings: Settings, presenter: Presenter) -> Self {
        let theme = Theme::new(settings.theme);
        let control = settings.control_key();
        Self {
            should_quit: false,
            started: false,
            theme,
            settings,
            config_path: None,
            presenter,
            control,
            screen: Screen::default(),
            last: None,
        }
    }

    /// Persist theme changes to `path`.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Initial display. Runs once; later calls are no-ops.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        let update = self
            .presenter
            .start(&mut self.screen, self.control.is_some());
        self.last = Some(update);
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.start();
        while !self.should_quit {
            self.draw(terminal)?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            let area = frame.size();
            frame.render_widget(
                Block::new()
                    .borders(Borders::NONE)
                    .style(self.theme.ratatui_style(Element::Background)),
                area,
            );

            let app_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(3),
                ])
                .split(area);

            render_header(frame, app_chunks[0], &self.theme, &self.screen);
            render_quote(frame, app_chunks[1], &self.theme, &self.screen);
            render_footer(
                frame,
                app_chunks[2],
                &self.theme,
                &self.screen,
                self.control.filter(|_| self.presenter.interactive()),
            );
        })?;
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.presenter.interactive() && self.is_trigger(key.code) {
            self.last = Some(self.presenter.trigger(&mut self.screen));
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') => self.toggle_theme(),
            _ => {}
        }
    }

    fn is_trigger(&self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => Some(c) == self.control || c == ' ',
            KeyCode::Enter => true,
            _ => false,
        }
    }

    fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.settings.theme = self.theme.variant();
        debug!(theme = self.theme.variant().label(), "theme toggled");
        if let Some(path) = &self.config_path {
            if let Err(e) = Settings::save_theme(path, self.settings.theme) {
                warn!("Failed to save settings: {}", e);
            }
        }
    }
}
