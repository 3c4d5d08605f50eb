//! Example demonstrating scramble generation.
//!
//! This example shows how to:
//! - Create a `Scrambler` for a chosen board size
//! - Generate a random solvable scramble and print it with its seed
//! - Replay a scramble from a hex seed or derive one from a phrase
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble_board
//! ```
//!
//! Replay a specific scramble:
//!
//! ```sh
//! cargo run --example scramble_board -- --seed <64-char-hex>
//! ```
//!
//! Derive the seed from a phrase (stable across runs):
//!
//! ```sh
//! cargo run --example scramble_board -- --size 5 --phrase "daily #128"
//! ```

use std::process;

use clap::Parser;
use slidelace_generator::{ScrambleSeed, Scrambler};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid dimension N; the board has N×N cells.
    #[arg(long, value_name = "N", default_value_t = 4)]
    size: u8,

    /// Replay the scramble with this 64-character hex seed.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase instead of fresh entropy.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let scrambler = match Scrambler::new(args.size) {
        Ok(scrambler) => scrambler,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let seed = match (&args.seed, &args.phrase) {
        (Some(hex), _) => match hex.parse::<ScrambleSeed>() {
            Ok(seed) => Some(seed),
            Err(err) => {
                eprintln!("{err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => Some(ScrambleSeed::from_phrase(phrase)),
        (None, None) => None,
    };

    let scrambled = match seed {
        Some(seed) => scrambler.scramble_with_seed(seed),
        None => scrambler.scramble(),
    };

    println!("seed: {}", scrambled.seed);
    println!("{}", scrambled.board);
}
