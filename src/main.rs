//! blockfall binary.
//!
//! `blockfall` (or `blockfall play`) runs the game in the terminal using
//! crossterm for input and the framebuffer renderer for output.
//! `blockfall headless` lets the built-in player run a game and prints the
//! report as JSON.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use blockfall::config::{Cli, Mode, Settings};
use blockfall::core::{Game, GameSettings};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;
use blockfall::{headless, logging};

fn main() -> Result<()> {
    let settings = Settings::from_cli(Cli::parse())?;
    logging::init(&settings)?;

    match settings.mode {
        Mode::Play => play(settings.game),
        Mode::Headless { .. } => {
            let report = headless::run(&settings);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

fn play(settings: GameSettings) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, settings);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, settings: GameSettings) -> Result<()> {
    info!(
        seed = settings.seed,
        width = settings.board.width,
        height = settings.board.height,
        "starting game"
    );
    let mut game = Game::new(settings);
    let view = GameView::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        info!(
                            pieces = game.pieces_locked(),
                            lines = game.lines(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply(action);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
