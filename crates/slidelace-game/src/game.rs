//! Game session state and move application.

use slidelace_core::Board;
use slidelace_generator::{ScrambleSeed, Scrambler};

use crate::{GameConfig, GameError, MoveOutcome};

/// A sliding-tile game session.
///
/// Owns the board plus the session state the engine is responsible for: the
/// count of accepted moves and the solved flag. The solved flag is monotonic;
/// once the tiles reach the identity arrangement the game is terminal and
/// every further move attempt is rejected without mutating anything.
///
/// # Example
///
/// ```
/// use slidelace_game::{Game, GameConfig};
///
/// let game = Game::new(&GameConfig::default()).unwrap();
/// assert_eq!(game.board().size(), 4);
/// assert_eq!(game.move_count(), 0);
/// // A fresh scramble is solvable, so play can begin
/// assert!(game.board().is_solvable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    move_count: u64,
    solved: bool,
}

/// A read-only view of the session for rendering.
///
/// Handed to the renderer after construction and after every accepted move;
/// the renderer has no write access to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Tile values in row-major order.
    pub tiles: &'a [u16],
    /// Grid dimension N.
    pub size: u8,
    /// Whether the board has reached the solved arrangement.
    pub solved: bool,
    /// Moves accepted since construction.
    pub move_count: u64,
}

impl Game {
    /// Creates a game session from a configuration.
    ///
    /// With scrambling enabled the board is a random solvable permutation,
    /// drawn from the configured seed or fresh entropy. With scrambling
    /// disabled the supplied layout is used, or the fixed default layout if
    /// none was given.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] if the size is below 2 or
    /// a supplied layout is not a permutation of `0..size²`. Construction
    /// errors abort game start; a broken board is never returned.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let board = if config.scramble_value() {
            let scrambler = Scrambler::new(config.size_value())?;
            let seed = config.seed_value().unwrap_or_else(ScrambleSeed::from_entropy);
            scrambler.scramble_with_seed(seed).board
        } else if let Some(layout) = config.layout_value() {
            Board::from_tiles(config.size_value(), layout.to_vec())?
        } else {
            Board::default_layout(config.size_value())?
        };
        Ok(Self::from_board(board))
    }

    /// Creates a game session directly from a board.
    ///
    /// The solved flag is checked explicitly here rather than assumed false:
    /// a fixed layout equal to the identity arrangement starts the session in
    /// the terminal solved state, with no moves accepted.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let solved = board.is_solved();
        Self {
            board,
            move_count: 0,
            solved,
        }
    }

    /// Returns the current board arrangement.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of accepted moves since construction.
    ///
    /// Rejected attempts never change this count.
    #[must_use]
    pub const fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Checks whether the session has reached the solved arrangement.
    ///
    /// Once true this stays true for the life of the session.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns a read-only snapshot for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            tiles: self.board.tiles(),
            size: self.board.size(),
            solved: self.solved,
            move_count: self.move_count,
        }
    }

    /// Attempts to slide the tile at `index` into an adjacent blank.
    ///
    /// On an accepted move the two changed positions are reported so the
    /// caller can redraw only the affected region, the move counter is
    /// incremented, and the solved flag is recomputed by a full scan of the
    /// tiles against the identity arrangement. An in-range index with no
    /// adjacent blank is a normal rejection, as is any attempt once the game
    /// is solved; neither mutates the session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] for an index outside
    /// `0..size²`. The session is left untouched.
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let cells = self.board.cell_count();
        if index >= cells {
            return Err(GameError::IndexOutOfRange { index, cells });
        }
        if self.solved {
            return Ok(MoveOutcome::RejectedSolved);
        }
        match self.board.slide(index) {
            Some(blank) => {
                self.move_count += 1;
                self.solved = self.board.is_solved();
                Ok(MoveOutcome::Moved { index, blank })
            }
            None => Ok(MoveOutcome::RejectedNoBlank),
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use slidelace_core::{BoardError, CanvasConfig, board::DEFAULT_LAYOUT_4};

    use super::*;

    fn fixed_game() -> Game {
        Game::new(&GameConfig::default().scramble(false)).unwrap()
    }

    #[test]
    fn test_fixed_construction_yields_default_layout() {
        let game = fixed_game();
        assert_eq!(game.board().tiles(), DEFAULT_LAYOUT_4);
        assert_eq!(game.move_count(), 0);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_construction_rejects_bad_config() {
        let result = Game::new(&GameConfig::default().size(1));
        assert_eq!(
            result,
            Err(GameError::InvalidConfiguration(BoardError::SizeTooSmall {
                size: 1
            }))
        );

        let result = Game::new(
            &GameConfig::default()
                .size(2)
                .scramble(false)
                .layout(vec![0, 1, 2, 2]),
        );
        assert_eq!(
            result,
            Err(GameError::InvalidConfiguration(BoardError::DuplicateTile {
                tile: 2
            }))
        );
    }

    #[test]
    fn test_scrambled_construction_is_solvable() {
        let game = Game::new(&GameConfig::default().size(3)).unwrap();
        assert!(game.board().is_solvable());
        assert!(!game.is_solved());
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_seeded_games_are_reproducible() {
        let config = GameConfig::default().seed(ScrambleSeed::from_phrase("rematch"));
        let first = Game::new(&config).unwrap();
        let second = Game::new(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_accepted_move_swaps_and_counts() {
        let mut game = fixed_game();
        // Blank (value 15) sits at index 14; index 13 holds 9 and is
        // left-adjacent to it
        let outcome = game.attempt_move(13).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                index: 13,
                blank: 14
            }
        );
        assert_eq!(outcome.changed_positions(), Some([13, 14]));
        assert_eq!(game.board().tile(13), 15);
        assert_eq!(game.board().tile(14), 9);
        assert_eq!(game.move_count(), 1);
        assert!(!game.is_solved());
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut game = fixed_game();
        // Index 6 is nowhere near the blank at 14
        let first = game.attempt_move(6).unwrap();
        let state = game.clone();
        let second = game.attempt_move(6).unwrap();

        assert_eq!(first, MoveOutcome::RejectedNoBlank);
        assert_eq!(second, MoveOutcome::RejectedNoBlank);
        assert_eq!(first.changed_positions(), None);
        assert_eq!(game, state);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let mut game = fixed_game();
        let state = game.clone();
        assert_eq!(
            game.attempt_move(16),
            Err(GameError::IndexOutOfRange {
                index: 16,
                cells: 16
            })
        );
        assert_eq!(game, state, "a failed call must not corrupt the session");
    }

    #[test]
    fn test_solving_move_is_terminal() {
        // One slide away from solved: blank at 2, tile 2 below it at 3
        let board = Board::from_tiles(2, vec![0, 1, 3, 2]).unwrap();
        let mut game = Game::from_board(board);
        assert!(!game.is_solved());

        let outcome = game.attempt_move(3).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved { index: 3, blank: 2 });
        assert!(game.is_solved());
        assert_eq!(game.move_count(), 1);

        // Solved is terminal: every further attempt is rejected unchanged
        let state = game.clone();
        for index in 0..4 {
            assert_eq!(game.attempt_move(index).unwrap(), MoveOutcome::RejectedSolved);
        }
        assert_eq!(game, state);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_identity_layout_starts_solved() {
        let mut game = Game::new(
            &GameConfig::default()
                .size(2)
                .scramble(false)
                .layout(vec![0, 1, 2, 3]),
        )
        .unwrap();
        assert!(game.is_solved());
        assert_eq!(game.attempt_move(2).unwrap(), MoveOutcome::RejectedSolved);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_snapshot_reflects_session() {
        let mut game = fixed_game();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.tiles, DEFAULT_LAYOUT_4);
        assert_eq!(snapshot.size, 4);
        assert_eq!(snapshot.move_count, 0);
        assert!(!snapshot.solved);

        game.attempt_move(13).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.move_count, 1);
        assert_eq!(snapshot.tiles[13], 15);
    }

    #[test]
    fn test_canvas_config_conversion() {
        let canvas = CanvasConfig {
            tile_size: 3,
            scramble: true,
            ..CanvasConfig::default()
        };
        let game = Game::new(&GameConfig::from(&canvas)).unwrap();
        assert_eq!(game.board().size(), 3);
        assert!(game.board().is_solvable());

        // Scramble disabled falls back to the fixed default layout
        let canvas = CanvasConfig::default();
        let game = Game::new(&GameConfig::from(&canvas)).unwrap();
        assert_eq!(game.board().tiles(), DEFAULT_LAYOUT_4);
    }

    proptest! {
        #[test]
        fn prop_move_count_tracks_accepted_moves(
            bytes in any::<[u8; 32]>(),
            indices in proptest::collection::vec(0usize..16, 1..64),
        ) {
            let config = GameConfig::default().seed(ScrambleSeed::from_bytes(bytes));
            let mut game = Game::new(&config).unwrap();
            let mut accepted = 0u64;
            for index in indices {
                match game.attempt_move(index).unwrap() {
                    MoveOutcome::Moved { .. } => accepted += 1,
                    MoveOutcome::RejectedNoBlank | MoveOutcome::RejectedSolved => {}
                }
                prop_assert_eq!(game.move_count(), accepted);
                // Legal moves never break solvability
                prop_assert!(game.board().is_solvable());
            }
        }

        #[test]
        fn prop_solved_flag_is_monotonic(
            indices in proptest::collection::vec(0usize..4, 0..48),
        ) {
            // 2×2 boards solve quickly, exercising the terminal state
            let board = Board::from_tiles(2, vec![0, 1, 3, 2]).unwrap();
            let mut game = Game::from_board(board);
            let mut was_solved = false;
            for index in indices {
                let outcome = game.attempt_move(index).unwrap();
                if was_solved {
                    prop_assert_eq!(outcome, MoveOutcome::RejectedSolved);
                }
                was_solved = was_solved || game.is_solved();
            }
        }
    }
}
