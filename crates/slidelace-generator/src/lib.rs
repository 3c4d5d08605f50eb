//! Solvable scramble generation for sliding-tile boards.
//!
//! A freshly scrambled board must be reachable from the solved arrangement by
//! legal slides, which exactly half of all permutations are. The
//! [`Scrambler`] draws uniformly random permutations by rejection sampling
//! and keeps the first solvable one; [`ScrambleSeed`] makes the process
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use slidelace_generator::{ScrambleSeed, Scrambler};
//!
//! let scrambler = Scrambler::new(4).unwrap();
//!
//! // Every scramble is a solvable permutation
//! let scrambled = scrambler.scramble();
//! assert!(scrambled.board.is_solvable());
//!
//! // The same seed reproduces the same board
//! let again = scrambler.scramble_with_seed(scrambled.seed);
//! assert_eq!(again.board, scrambled.board);
//! ```

pub use self::{
    scrambler::{ScrambledBoard, Scrambler},
    seed::{ParseSeedError, ScrambleSeed},
};

mod scrambler;
mod seed;
