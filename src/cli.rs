//! Command-line and environment handling for the `tui-bowling` binary.
//!
//! # Commands
//!
//! - `tui-bowling` - interactive score sheet
//! - `tui-bowling score [--json] [ROLLS...]` - score rolls given as arguments
//!   (or read from stdin when none are given) and print the report
//!
//! Rolls are pin counts, `X` for a strike, `/` for a spare and `-` for a miss.
//! Commas are accepted as separators.
//!
//! # Environment Variables
//!
//! - `BOWLING_LOG`: `tracing` filter directive (default `warn`; logging is off
//!   in the interactive sheet unless this is set)
//! - `BOWLING_HIDE_HELP`: set to "1" or "true" to hide the key help line

use anyhow::{anyhow, bail, Context, Result};

use crate::core::Game;
use crate::types::ScoreAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Interactive,
    Score { json: bool, rolls: Vec<String> },
}

pub fn parse_args(args: &[String]) -> Result<Command> {
    let Some(first) = args.first() else {
        return Ok(Command::Interactive);
    };
    if first != "score" {
        bail!("unknown command: {first} (expected `score`)");
    }

    let mut json = false;
    let mut rolls = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => bail!("score: unknown flag: {flag}"),
            other => rolls.extend(split_rolls(other)),
        }
    }
    Ok(Command::Score { json, rolls })
}

/// Split whitespace- or comma-separated roll tokens.
pub fn split_rolls(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn parse_roll_token(token: &str) -> Option<ScoreAction> {
    match token {
        "-" => Some(ScoreAction::Knock(0)),
        other => ScoreAction::from_str(other).filter(|a| *a != ScoreAction::Restart),
    }
}

/// Feed roll tokens into a fresh game, stopping at the first bad one.
pub fn score_rolls<S: AsRef<str>>(tokens: &[S]) -> Result<Game> {
    let mut game = Game::new();
    for (i, token) in tokens.iter().enumerate() {
        let token = token.as_ref();
        let action = parse_roll_token(token)
            .ok_or_else(|| anyhow!("roll #{}: cannot parse {token:?}", i + 1))?;
        game.apply_action(action)
            .with_context(|| format!("roll #{} ({token})", i + 1))?;
    }
    Ok(game)
}

/// Text printed by `score`: the ten report lines plus totals.
pub fn score_output(game: &Game, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(&game.snapshot()).context("serialize snapshot");
    }
    let total = game
        .score()
        .map_or_else(|| "-".to_string(), |s| s.to_string());
    Ok(format!(
        "{}\nTotal: {}\nMax possible: {}",
        game.report(),
        total,
        game.max_possible_score()
    ))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: Option<String>,
    pub hide_help: bool,
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("BOWLING_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let hide_help = lookup("BOWLING_HIDE_HELP")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        Self {
            log_filter,
            hide_help,
        }
    }

    /// Filter directive to install, if logging is on for this command.
    pub fn effective_log_filter(&self, command: &Command) -> Option<&str> {
        match (&self.log_filter, command) {
            (Some(filter), _) => Some(filter.as_str()),
            (None, Command::Score { .. }) => Some("warn"),
            (None, Command::Interactive) => None,
        }
    }
}
