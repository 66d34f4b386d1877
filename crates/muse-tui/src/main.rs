use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use muse_core::{presenter::Presenter, settings::Settings};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use tracing::{info, warn};

mod cli;
mod logging;
mod ui;

use cli::Cli;
use ui::app::{App, Screen};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.once {
        logging::init_stderr(cli.verbose);
    } else {
        let path = logging::init_file(cli.verbose)?;
        info!(log = %path.display(), "Starting Muse");
    }

    let config_path = Settings::local_config_path(cli.config.as_deref());
    let mut settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            warn!("Failed to load settings: {}. Using defaults.", e);
            Settings::default()
        }
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }

    let mut presenter =
        muse_core::build_presenter(&settings).context("invalid quote catalog")?;

    if cli.once {
        print!("{}", render_once(&mut presenter, settings.control_key().is_some()));
        return Ok(());
    }

    let mut terminal = init_terminal()?;
    let mut app = App::new(settings, presenter).with_config_path(config_path);

    let result = app.run(&mut terminal);

    restore_terminal(&mut terminal)?;

    result
}

/// Startup render as plain text: quote, attribution, color.
fn render_once(presenter: &mut Presenter, control_available: bool) -> String {
    let mut screen = Screen::default();
    let update = presenter.start(&mut screen, control_available);
    format!("{}\n{}\n{}\n", screen.quote, screen.attribution, update.color)
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
