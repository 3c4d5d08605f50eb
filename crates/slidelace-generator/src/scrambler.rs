//! Rejection-sampling scramble generation.

use log::debug;
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use slidelace_core::{Board, BoardError};

use crate::ScrambleSeed;

/// Generates solvable scrambles for boards of one fixed size.
///
/// Layouts are drawn as uniformly random permutations (pick random values,
/// skip duplicates until the permutation is complete) and rejected until one
/// passes the parity solvability check. Solvable permutations are exactly
/// half of all permutations for any size, and each draw is independent, so
/// the loop terminates with probability 1 and two expected draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrambler {
    size: u8,
}

/// A scramble together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledBoard {
    /// The scrambled arrangement; always a solvable permutation.
    pub board: Board,
    /// Seed that reproduces this board via
    /// [`Scrambler::scramble_with_seed`].
    pub seed: ScrambleSeed,
}

impl Scrambler {
    /// Creates a scrambler for `size`×`size` boards.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] if `size < 2`.
    pub fn new(size: u8) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::SizeTooSmall { size });
        }
        Ok(Self { size })
    }

    /// Returns the grid dimension this scrambler produces.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Scrambles with a fresh entropy seed.
    ///
    /// The seed is reported in the result so the scramble can be replayed.
    #[must_use]
    pub fn scramble(&self) -> ScrambledBoard {
        self.scramble_with_seed(ScrambleSeed::from_entropy())
    }

    /// Scrambles deterministically from the given seed.
    ///
    /// The same seed and size always produce the same board.
    #[must_use]
    pub fn scramble_with_seed(&self, seed: ScrambleSeed) -> ScrambledBoard {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let mut attempt = 0u32;
        let board = loop {
            attempt += 1;
            let tiles = draw_permutation(&mut rng, self.size);
            let board = Board::from_tiles(self.size, tiles)
                .expect("rejection sampling yields a full permutation");
            if board.is_solvable() {
                break board;
            }
            debug!("scramble attempt {attempt} drew an unsolvable layout, redrawing");
        };
        ScrambledBoard { board, seed }
    }
}

/// Draws a uniformly random permutation of `0..size²` by rejection sampling:
/// random values are drawn and duplicates skipped until every value has
/// appeared once.
fn draw_permutation(rng: &mut impl Rng, size: u8) -> Vec<u16> {
    let cells = u16::from(size) * u16::from(size);
    let mut tiles = Vec::with_capacity(usize::from(cells));
    let mut seen = vec![false; usize::from(cells)];
    while tiles.len() < usize::from(cells) {
        let tile = rng.random_range(0..cells);
        if !seen[usize::from(tile)] {
            seen[usize::from(tile)] = true;
            tiles.push(tile);
        }
    }
    tiles
}
