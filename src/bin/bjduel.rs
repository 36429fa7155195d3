//! Play one game of blackjack against the computer in the terminal.
//!
//! The process always exits with status 0. Problems are reported on stderr.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use bjduel::cli::{self, USAGE};
use bjduel::{Game, GameOptions};

fn main() {
    let seed = match cli::parse_args(std::env::args().skip(1)) {
        Ok(seed) => seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        }),
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            return;
        }
    };

    let mut game = Game::new(GameOptions::default(), seed);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    if let Err(err) = cli::run(&mut game, &mut input, &mut output) {
        eprintln!("error: {err}");
    }
}
