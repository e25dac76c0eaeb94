//! termfolio terminal entry point.
//!
//! Plays the boot sequence, then runs an interactive portfolio shell in the
//! current terminal. Tab completes, Up/Down walk history, Ctrl+L clears the
//! screen, Esc / Ctrl+C / Ctrl+D quit.

mod input;
mod plain;
mod render;

use std::io::{self, Stdout};
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use input::InputResult;
use render::TerminalRenderer;
use termfolio_core::{BootPoll, Renderer, Session};
use termfolio_types::config::TermfolioConfig;

type TermSession = Session<TerminalRenderer<Stdout>>;

/// Restores the terminal on drop (including panics).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), crossterm::cursor::Show);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config()?;
    log::info!("Starting termfolio for {}", config.site);

    let renderer = TerminalRenderer::new(io::stdout(), &config.prompt);
    let mut session = Session::new(&config, renderer);

    enable_raw_mode().context("enabling raw mode")?;
    let _guard = TerminalGuard;

    session.renderer_mut().clear();
    if boot(&mut session)? == InputResult::Quit {
        return Ok(());
    }
    run(&mut session)?;

    session.renderer_mut().clear_prompt()?;
    Ok(())
}

/// Config from the first CLI argument, then `TERMFOLIO_CONFIG`, then the
/// built-in defaults.
fn load_config() -> Result<TermfolioConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TERMFOLIO_CONFIG").ok());
    match path {
        Some(path) => {
            let config = TermfolioConfig::load(Path::new(&path))
                .with_context(|| format!("loading config from {path}"))?;
            log::info!("Loaded config: {path}");
            Ok(config)
        },
        None => Ok(TermfolioConfig::default()),
    }
}

/// Play the boot sequence. Keys pressed meanwhile are fed to the session,
/// which discards them; only the quit keys take effect.
fn boot(session: &mut TermSession) -> Result<InputResult> {
    loop {
        match session.poll_boot() {
            BootPoll::Complete => return Ok(InputResult::Continue),
            BootPoll::Sleep(delay) => {
                if drain_keys(session, delay)? == InputResult::Quit {
                    return Ok(InputResult::Quit);
                }
            },
        }
    }
}

fn drain_keys(session: &mut TermSession, delay: Duration) -> Result<InputResult> {
    let deadline = Instant::now() + delay;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() || !event::poll(remaining)? {
            return Ok(InputResult::Continue);
        }
        if let Event::Key(key) = event::read()? {
            if input::is_quit(&key) {
                return Ok(InputResult::Quit);
            }
            if let Some(key) = input::translate(&key) {
                session.handle_key(key);
            }
        }
    }
}

/// Interactive loop: one key at a time until a quit key.
fn run(session: &mut TermSession) -> Result<()> {
    redraw_prompt(session)?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if input::is_quit(&key) {
            return Ok(());
        }
        let Some(key) = input::translate(&key) else {
            continue;
        };
        session.renderer_mut().clear_prompt()?;
        session.handle_key(key);
        redraw_prompt(session)?;
    }
}

fn redraw_prompt(session: &mut TermSession) -> Result<()> {
    let line = session.input().clone();
    session.renderer_mut().draw_prompt(&line)?;
    Ok(())
}
