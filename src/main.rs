// Floating Tab Bar demo
// Terminal host application for the floating tab bar widget

// MODULES ------------------>>

mod app;
mod config;
mod config_validation;
mod logging;
mod render;

//--------------------------------------------------------<<
// IMPORTS ------------------>>

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

use app::DemoApp;
use config_validation::load_and_validate_config;
use render::render_app;

//--------------------------------------------------------<<

/// Poll interval while an animation is running (~60 fps)
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Poll interval when idle
const IDLE_TICK: Duration = Duration::from_millis(250);

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> anyhow::Result<()> {
    let _log_guard = logging::init_logging().context("failed to initialise logging")?;

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let (app_config, tab_bar) = load_and_validate_config(config_path);
    let mut app = DemoApp::new(app_config, tab_bar);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("demo exited with error: {:#}", e);
    }
    info!("logs written to {}", logging::log_file_path().display());
    result
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           MAIN LOOP                                            │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut DemoApp) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render_app(f, app))?;

        if app.should_quit {
            return Ok(());
        }

        let timeout = if app.tab_bar.is_animating() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                // Terminal resize - will be handled on next draw
                _ => {}
            }
        }
    }
}
