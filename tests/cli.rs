//! Console front-end tests.

use std::process::{Command, Stdio};

use bjduel::cli::{self, ArgsError, CliError, parse_args};
use bjduel::{
    ActionError, Card, Game, GameOptions, GameState, Outcome, RoundResult, ScriptedSource,
};

const PROMPT: &str = "Would you like to hit (1: Yes | 2: No)? ";

fn ids(ids: &[u8]) -> Vec<Card> {
    ids.iter().map(|&id| Card::from_id(id).unwrap()).collect()
}

fn play_scripted(draws: &[u8], input: &str) -> (RoundResult, String) {
    let mut game = Game::with_source(GameOptions::default(), ScriptedSource::new(ids(draws)));
    let mut output = Vec::new();
    let result = cli::run(&mut game, &mut input.as_bytes(), &mut output).unwrap();
    (result, String::from_utf8(output).unwrap())
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| (*arg).to_string()).collect()
}

#[test]
fn scripted_game_prints_hands_scores_and_loss() {
    // 5H, 6D, 10S, AC
    let (result, output) = play_scripted(&[5, 19, 49, 27], "1\n2\n");

    let expected = [
        "In Hand:  5H, \n",
        "  Score:  5\n",
        PROMPT,
        "\n",
        "In Hand:  5H, 10S, \n",
        "  Score:  15\n",
        PROMPT,
        "\n",
        "Computer:  6D, AC, \n",
        "   Score:  17\n",
        "  Player:  5H, 10S, \n",
        "   Score:  15\n",
        "You Lost.\n",
    ]
    .concat();

    assert_eq!(output, expected);
    assert_eq!(result.outcome, Outcome::Computer);
}

#[test]
fn bust_skips_prompt() {
    // 10H, 2D, 9S, 3C, 5C, KC, 4D
    let (result, output) = play_scripted(&[10, 15, 48, 29, 31, 39, 17], "1\n1\n");

    assert_eq!(output.matches(PROMPT).count(), 2);
    assert!(output.contains("  Score:  24\n\nComputer:  2D, 3C, KC, 4D, \n"));
    assert!(output.ends_with("You Lost.\n"));
    assert!(result.player_bust);
}

#[test]
fn twenty_one_draws_again_without_prompt() {
    // KH, 2D, AS, 3D, 5C, 4H, 10C
    let (result, output) = play_scripted(&[13, 15, 40, 16, 31, 4, 36], "1\n");

    assert_eq!(output.matches(PROMPT).count(), 1);
    assert!(output.contains("In Hand:  KH, AS, \n  Score:  21\n\nIn Hand:  KH, AS, 5C, \n"));
    assert_eq!(result.player_value, 26);
    assert_eq!(result.outcome, Outcome::Computer);
}

#[test]
fn invalid_answer_prompts_again() {
    // 10H, 9D, 8S
    let (result, output) = play_scripted(&[10, 22, 47], "abc\n2\n");

    assert!(output.contains(&format!("{PROMPT}Please enter 1 or 2.\n{PROMPT}")));
    assert_eq!(output.matches(PROMPT).count(), 2);
    assert_eq!(result.ai_value, 17);
    assert_eq!(result.outcome, Outcome::Computer);
}

#[test]
fn end_of_input_stands() {
    let (result, output) = play_scripted(&[10, 22, 47], "");

    assert_eq!(output.matches(PROMPT).count(), 1);
    assert!(!output.contains("Please enter"));
    assert_eq!(result.player_value, 10);
    assert_eq!(result.player_cards.len(), 1);
}

#[test]
fn any_number_other_than_two_hits() {
    // 2H, 3H, 4H, 5H, 6H, 10C
    let (result, output) = play_scripted(&[2, 3, 4, 5, 6, 36], "7\n2\n");

    assert_eq!(result.player_cards.len(), 2);
    assert_eq!(result.player_value, 6);
    assert!(result.ai_bust);
    assert_eq!(result.outcome, Outcome::Player);
    assert!(output.ends_with("You Won! Congratulations.\n"));
}

#[test]
fn seeded_games_replay_identically() {
    let play = |seed| {
        let mut game = Game::new(GameOptions::default(), seed);
        let mut output = Vec::new();
        let result = cli::run(&mut game, &mut "1\n1\n2\n".as_bytes(), &mut output).unwrap();
        (result, output)
    };

    let (first_result, first_output) = play(1234);
    let (second_result, second_output) = play(1234);

    assert_eq!(first_result, second_result);
    assert_eq!(first_output, second_output);
}

#[test]
fn run_requires_a_fresh_game() {
    let mut game = Game::new(GameOptions::default(), 8);
    game.play_round().unwrap();
    if game.state() == GameState::AwaitingPlayerChoice {
        game.stand().unwrap();
    }

    let mut output = Vec::new();
    let err = cli::run(&mut game, &mut "".as_bytes(), &mut output).unwrap_err();
    assert!(matches!(err, CliError::Action(ActionError::InvalidState)));
    assert!(output.is_empty());
}

#[test]
fn outcome_messages() {
    assert_eq!(
        cli::outcome_message(Outcome::Player),
        "You Won! Congratulations."
    );
    assert_eq!(cli::outcome_message(Outcome::Computer), "You Lost.");
    assert_eq!(cli::outcome_message(Outcome::Tie), "The game was a tie.");
}

#[test]
fn command_line_seed() {
    assert_eq!(parse_args(args(&[])), Ok(None));
    assert_eq!(parse_args(args(&["--seed", "42"])), Ok(Some(42)));
    assert_eq!(
        parse_args(args(&["--seed"])),
        Err(ArgsError::MissingSeed)
    );
    assert_eq!(
        parse_args(args(&["--seed", "x"])),
        Err(ArgsError::InvalidSeed("x".to_string()))
    );
    assert_eq!(
        parse_args(args(&["-v"])),
        Err(ArgsError::UnknownArgument("-v".to_string()))
    );
}

#[test]
fn bad_command_line_prints_usage_and_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_bjduel"))
        .args(["--seed", "nope"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid seed `nope`"));
    assert!(stderr.contains(cli::USAGE));
}
