//! Terminal front-end: prints hands and scores, reads hit/stand choices.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::dealer::CardSource;
use crate::error::{ActionError, ShowdownError};
use crate::game::{Game, GameState};
use crate::result::{Outcome, RoundResult};

const HIT_PROMPT: &str = "Would you like to hit (1: Yes | 2: No)? ";

/// Usage line for the binary.
pub const USAGE: &str = "usage: bjduel [--seed <u64>]";

/// A hit/stand answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Errors raised while running a game on the console.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
    /// A turn could not be played.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The winner could not be decided.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

/// Errors in the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// `--seed` was given without a value.
    #[error("--seed needs a value")]
    MissingSeed,
    /// The seed is not an unsigned 64-bit integer.
    #[error("invalid seed `{0}`")]
    InvalidSeed(String),
    /// An argument that is not understood.
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
}

/// Parses the command line (without the program name).
///
/// Returns the seed given with `--seed`, if any.
///
/// # Errors
///
/// Returns an error for a missing or malformed seed or an unknown argument.
pub fn parse_args<I>(args: I) -> Result<Option<u64>, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut seed = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or(ArgsError::MissingSeed)?;
                let parsed = value
                    .parse::<u64>()
                    .map_err(|_| ArgsError::InvalidSeed(value.clone()))?;
                seed = Some(parsed);
            }
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }

    Ok(seed)
}

/// Parses one line of hit/stand input.
///
/// `2` stands and any other integer hits. Returns `None` if the line is not
/// an integer.
///
/// ```
/// use bjduel::cli::{Choice, parse_choice};
///
/// assert_eq!(parse_choice("2\n"), Some(Choice::Stand));
/// assert_eq!(parse_choice(" 1 "), Some(Choice::Hit));
/// assert_eq!(parse_choice("7"), Some(Choice::Hit));
/// assert_eq!(parse_choice("yes"), None);
/// ```
#[must_use]
pub fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim().parse::<i64>() {
        Ok(2) => Some(Choice::Stand),
        Ok(_) => Some(Choice::Hit),
        Err(_) => None,
    }
}

/// Message printed for each outcome.
#[must_use]
pub const fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "You Won! Congratulations.",
        Outcome::Computer => "You Lost.",
        Outcome::Tie => "The game was a tie.",
    }
}

/// Prompts until the player gives a usable answer. End of input stands.
fn prompt_choice<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Choice> {
    loop {
        write!(output, "{HIT_PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Choice::Stand);
        }

        match parse_choice(&line) {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "Please enter 1 or 2.")?,
        }
    }
}

/// Plays one full game on the given console streams.
///
/// # Errors
///
/// Returns an error if the console fails or the game is not in its initial
/// dealing state.
pub fn run<S, R, W>(
    game: &mut Game<S>,
    input: &mut R,
    output: &mut W,
) -> Result<RoundResult, CliError>
where
    S: CardSource,
    R: BufRead,
    W: Write,
{
    loop {
        let step = game.play_round()?;

        writeln!(output, "In Hand:  {}", game.player_hand())?;
        writeln!(output, "  Score:  {}", step.player_value)?;

        if step.next_state == GameState::AwaitingPlayerChoice {
            match prompt_choice(input, output)? {
                Choice::Hit => game.hit()?,
                Choice::Stand => game.stand()?,
            }
        }

        writeln!(output)?;

        if game.state() != GameState::Dealing {
            break;
        }
    }

    game.ai_finish()?;
    let result = game.showdown()?;

    writeln!(output, "Computer:  {}", game.ai_hand())?;
    writeln!(output, "   Score:  {}", result.ai_value)?;
    writeln!(output, "  Player:  {}", game.player_hand())?;
    writeln!(output, "   Score:  {}", result.player_value)?;
    writeln!(output, "{}", outcome_message(result.outcome))?;
    output.flush()?;

    Ok(result)
}
