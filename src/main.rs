//! Bowling score keeper (default binary).
//!
//! Without arguments this runs the interactive score sheet: crossterm for
//! input and a framebuffer-based renderer. `score` prints a report instead.

use std::io::{self, Read};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_bowling::cli::{parse_args, score_output, score_rolls, split_rolls, AppConfig, Command};
use tui_bowling::core::Game;
use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{ScoreSheetView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;
    let config = AppConfig::from_env();

    if let Some(filter) = config.effective_log_filter(&command) {
        init_logging(filter)?;
    }

    match command {
        Command::Score { json, rolls } => run_score(json, rolls),
        Command::Interactive => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run_interactive(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn init_logging(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid BOWLING_LOG: {filter}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run_score(json: bool, mut rolls: Vec<String>) -> Result<()> {
    if rolls.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("read rolls from stdin")?;
        rolls.extend(split_rolls(&input));
    }

    let game = score_rolls(&rolls)?;
    tracing::info!(rolls = rolls.len(), score = ?game.score(), "scored");
    println!("{}", score_output(&game, json)?);
    Ok(())
}

fn run_interactive(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = Game::new();
    let view = ScoreSheetView::default().with_help(!config.hide_help);
    let mut message: Option<String> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game.snapshot(), message.as_deref(), Viewport::new(w, h));
        term.draw(&fb)?;

        // The sheet only changes on input, so block until the next event.
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        if let Some(action) = handle_key_event(key) {
            message = match game.apply_action(action) {
                Ok(()) => None,
                Err(err) => {
                    tracing::debug!(action = action.as_str(), %err, "action rejected");
                    Some(err.to_string())
                }
            };
        }
    }
}
