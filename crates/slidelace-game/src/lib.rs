//! Sliding-tile game sessions.
//!
//! A [`Game`] wraps a scrambled (or fixed) board with the session state the
//! engine owns: the move counter and the terminal solved flag. Moves are
//! applied through [`Game::attempt_move`], which returns a structured
//! [`MoveOutcome`] that UI layers project into redraws and status text; the
//! engine holds no references to any presentation state.
//!
//! # Examples
//!
//! ```
//! use slidelace_game::{Game, GameConfig, MoveOutcome};
//!
//! // The fixed 4×4 layout, no scramble: blank at index 14
//! let config = GameConfig::default().scramble(false);
//! let mut game = Game::new(&config).unwrap();
//!
//! // Index 13 is left-adjacent to the blank
//! let outcome = game.attempt_move(13).unwrap();
//! assert_eq!(outcome, MoveOutcome::Moved { index: 13, blank: 14 });
//! assert_eq!(outcome.changed_positions(), Some([13, 14]));
//! assert_eq!(game.move_count(), 1);
//!
//! // Index 0 has no adjacent blank: rejected, nothing changes
//! assert_eq!(game.attempt_move(0).unwrap(), MoveOutcome::RejectedNoBlank);
//! assert_eq!(game.move_count(), 1);
//! ```

use slidelace_core::{BoardError, CanvasConfig};
use slidelace_generator::ScrambleSeed;

pub use self::game::{Game, Snapshot};

mod game;

/// Errors from game construction and move application.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// A grid index outside `0..size²` was passed to
    /// [`Game::attempt_move`]. This is a caller bug; the board is left
    /// untouched.
    #[display("tile index {index} out of range for a {cells}-cell board")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Cell count of the board.
        cells: usize,
    },
    /// The configuration cannot produce a board; game start is aborted.
    #[display("invalid board configuration: {_0}")]
    InvalidConfiguration(#[from] BoardError),
}

/// The result of one move attempt.
///
/// In-range moves never fail: clicking a tile with no adjacent blank is a
/// normal rejected outcome, not an error, and the UI layer typically ignores
/// it silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The tile at `index` slid into the blank, which previously sat at
    /// `blank`. These are the only two positions that changed.
    Moved {
        /// The clicked grid position.
        index: usize,
        /// The former blank position the tile moved into.
        blank: usize,
    },
    /// No neighbor of the clicked position held the blank; nothing changed.
    RejectedNoBlank,
    /// The board is already solved; the game no longer accepts moves.
    RejectedSolved,
}

impl MoveOutcome {
    /// Returns the two positions changed by an accepted move, so a renderer
    /// can redraw only the affected region. Rejected moves change nothing.
    #[must_use]
    pub const fn changed_positions(self) -> Option<[usize; 2]> {
        match self {
            Self::Moved { index, blank } => Some([index, blank]),
            Self::RejectedNoBlank | Self::RejectedSolved => None,
        }
    }
}

/// Construction-time options for a game session.
///
/// # Examples
///
/// ```
/// use slidelace_game::{Game, GameConfig};
/// use slidelace_generator::ScrambleSeed;
///
/// let config = GameConfig::default()
///     .size(3)
///     .seed(ScrambleSeed::from_phrase("daily #128"));
/// let game = Game::new(&config).unwrap();
/// assert_eq!(game.board().size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    size: u8,
    scramble: bool,
    layout: Option<Vec<u16>>,
    seed: Option<ScrambleSeed>,
}

impl Default for GameConfig {
    /// A scrambled 4×4 game with a fresh entropy seed.
    fn default() -> Self {
        Self {
            size: 4,
            scramble: true,
            layout: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Sets the grid dimension N.
    #[must_use]
    pub fn size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    /// Enables or disables scrambling. With scrambling disabled the game
    /// starts from the supplied layout, or the fixed default layout if none
    /// is given.
    #[must_use]
    pub fn scramble(mut self, scramble: bool) -> Self {
        self.scramble = scramble;
        self
    }

    /// Supplies a fixed starting layout, used when scrambling is disabled.
    #[must_use]
    pub fn layout(mut self, layout: Vec<u16>) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Pins the scramble seed for a reproducible game.
    #[must_use]
    pub fn seed(mut self, seed: ScrambleSeed) -> Self {
        self.seed = Some(seed);
        self
    }

    pub(crate) const fn size_value(&self) -> u8 {
        self.size
    }

    pub(crate) const fn scramble_value(&self) -> bool {
        self.scramble
    }

    pub(crate) fn layout_value(&self) -> Option<&[u16]> {
        self.layout.as_deref()
    }

    pub(crate) const fn seed_value(&self) -> Option<ScrambleSeed> {
        self.seed
    }
}

impl From<&CanvasConfig> for GameConfig {
    /// Maps the canvas construction surface onto engine knobs; the
    /// renderer-only fields (`img_src`, `show_hint`, dimensions) are not
    /// consumed here.
    fn from(config: &CanvasConfig) -> Self {
        Self::default()
            .size(config.tile_size)
            .scramble(config.scramble)
    }
}
