//! Terminal UI.

mod app;
mod input;
mod layout;
mod ui;

pub use app::{App, Focus};
pub use input::{Action, Direction, map_key, move_cursor};
pub use layout::ScreenLayout;

use crate::config::Settings;
use crate::game::GameController;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture for as long as it lives.
///
/// Dropping the guard restores the terminal, also while unwinding.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal(&mut io::stdout()) {
            error!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode, the alternate screen and mouse capture.
///
/// Every step runs even if an earlier one fails; the first error is
/// returned.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Restores the terminal before the panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        previous(info);
    }));
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored before returning, also on error or panic.
#[instrument(skip_all, fields(order = %settings.initial_order()))]
pub fn run(settings: &Settings) -> Result<()> {
    info!("Starting TUI");

    let guard = TerminalGuard::enter()?;
    install_panic_hook();
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let app = App::new(GameController::with_order(*settings.initial_order()));
            run_app(&mut terminal, app)
        });
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!("TUI closed");
    res
}

/// Draw, wait for one input event, apply it; repeat.
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;

        let action = match event::read()? {
            Event::Key(key) => map_key(key),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => ScreenLayout::new(area).hit(column, row, app.game().history().len()),
            _ => None,
        };

        if let Some(action) = action {
            app.handle(action);
            debug!(
                current = app.game().current(),
                len = app.game().history().len(),
                "State after action"
            );
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
