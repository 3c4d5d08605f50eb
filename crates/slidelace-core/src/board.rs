//! Sliding-tile board arrangement, solvability, and the slide primitive.

use std::{fmt, num::ParseIntError, str::FromStr};

use crate::Position;

/// The fixed 4×4 starting arrangement used when scrambling is disabled.
///
/// The blank (value 15) sits at index 14. Note that this arrangement is
/// deliberately non-trivial but is not reachable from the solved state by
/// legal slides; the scramble path is the one that guarantees solvability.
pub const DEFAULT_LAYOUT_4: [u16; 16] = [4, 8, 1, 14, 7, 2, 3, 0, 12, 5, 6, 11, 13, 9, 15, 10];

/// An N×N sliding-tile arrangement.
///
/// The board holds a permutation of the tile values `0..N²` in row-major
/// order: `tiles[idx]` is the value occupying grid position `idx`, and the
/// value `N²-1` denotes the blank. Exactly one position holds the blank.
///
/// A `Board` knows nothing about move counting or session state; it is the
/// arrangement plus the two algorithms that operate on it directly, the
/// parity-based solvability check and the adjacent-blank slide. Session
/// concerns live in the game crate.
///
/// # Examples
///
/// ```
/// use slidelace_core::Board;
///
/// let mut board = Board::default_layout(4).unwrap();
/// assert_eq!(board.blank_index(), 14);
///
/// // Index 13 is left-adjacent to the blank, so the slide succeeds
/// assert_eq!(board.slide(13), Some(14));
/// assert_eq!(board.tile(13), 15);
/// assert_eq!(board.tile(14), 9);
///
/// // Index 0 has no adjacent blank, so nothing changes
/// assert_eq!(board.slide(0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    tiles: Vec<u16>,
    blank: usize,
}

/// Errors from board construction and layout validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The requested grid dimension is below the 2×2 minimum.
    #[display("board size must be at least 2, got {size}")]
    SizeTooSmall {
        /// The rejected dimension.
        size: u8,
    },
    /// The supplied layout does not have `size²` entries.
    #[display("layout has {len} tiles, expected {expected}")]
    LayoutLength {
        /// Number of entries supplied.
        len: usize,
        /// Number of entries required (`size²`).
        expected: usize,
    },
    /// A tile value does not fit on the board.
    #[display("tile value {tile} is out of range for a {cells}-cell board")]
    TileOutOfRange {
        /// The offending value.
        tile: u16,
        /// Cell count of the board.
        cells: usize,
    },
    /// A tile value occurs more than once.
    #[display("duplicate tile value {tile} in layout")]
    DuplicateTile {
        /// The first duplicated value.
        tile: u16,
    },
}

impl Board {
    /// Creates a board in the solved arrangement (`tiles[i] == i`).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] if `size < 2`.
    pub fn solved(size: u8) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::SizeTooSmall { size });
        }
        let blank = u16::from(size) * u16::from(size) - 1;
        let tiles = (0..=blank).collect();
        Ok(Self {
            size,
            tiles,
            blank: usize::from(blank),
        })
    }

    /// Creates a board from an explicit layout.
    ///
    /// The layout must be a permutation of `0..size²`; validation reports the
    /// first out-of-range or duplicated value it encounters.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] if `size < 2`,
    /// [`BoardError::LayoutLength`] on a length mismatch, and
    /// [`BoardError::TileOutOfRange`] or [`BoardError::DuplicateTile`] if the
    /// layout is not a permutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::{Board, BoardError};
    ///
    /// let board = Board::from_tiles(2, vec![0, 1, 3, 2]).unwrap();
    /// assert_eq!(board.blank_index(), 2);
    ///
    /// assert_eq!(
    ///     Board::from_tiles(2, vec![0, 1, 1, 2]),
    ///     Err(BoardError::DuplicateTile { tile: 1 }),
    /// );
    /// ```
    pub fn from_tiles(size: u8, tiles: Vec<u16>) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::SizeTooSmall { size });
        }
        let cells = usize::from(size) * usize::from(size);
        if tiles.len() != cells {
            return Err(BoardError::LayoutLength {
                len: tiles.len(),
                expected: cells,
            });
        }
        let mut seen = vec![false; cells];
        for &tile in &tiles {
            let Some(slot) = seen.get_mut(usize::from(tile)) else {
                return Err(BoardError::TileOutOfRange { tile, cells });
            };
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
        }
        let blank_value = u16::from(size) * u16::from(size) - 1;
        let blank = tiles
            .iter()
            .position(|&tile| tile == blank_value)
            .expect("validated permutation contains the blank value");
        Ok(Self { size, tiles, blank })
    }

    /// Creates the fixed fallback arrangement used when scrambling is disabled.
    ///
    /// For a 4×4 board this is exactly [`DEFAULT_LAYOUT_4`]. For other sizes
    /// it is the solved arrangement with two legal slides applied (blank moved
    /// left, then up), which is deterministic, non-trivial, and solvable.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SizeTooSmall`] if `size < 2`.
    pub fn default_layout(size: u8) -> Result<Self, BoardError> {
        if size == 4 {
            return Self::from_tiles(4, DEFAULT_LAYOUT_4.to_vec());
        }
        let mut board = Self::solved(size)?;
        let blank = board.blank;
        let _ = board.slide(blank - 1);
        let _ = board.slide(blank - 1 - usize::from(size));
        Ok(board)
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the number of cells, `N²`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the tile values in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Returns the tile value at a grid position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `size²`.
    #[must_use]
    pub fn tile(&self, index: usize) -> u16 {
        self.tiles[index]
    }

    /// Returns the blank tile value for this board, `size² - 1`.
    #[must_use]
    pub fn blank_value(&self) -> u16 {
        u16::from(self.size) * u16::from(self.size) - 1
    }

    /// Returns the grid position currently holding the blank.
    #[must_use]
    pub const fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the coordinate of a grid index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `size²`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Position {
        Position::from_index(index, self.size)
    }

    /// Checks whether the board is in the solved arrangement.
    ///
    /// The board is solved iff `tiles[i] == i` for every position, which puts
    /// the blank in the bottom-right corner.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &tile)| usize::from(tile) == index)
    }

    /// Counts the inversions of the arrangement.
    ///
    /// An inversion is a pair of non-blank tile values that are out of order
    /// when the board is read row-major. The blank is excluded on both sides
    /// of every pair.
    #[must_use]
    pub fn inversions(&self) -> usize {
        let blank = self.blank_value();
        let mut count = 0;
        for (index, &a) in self.tiles.iter().enumerate() {
            if a == blank {
                continue;
            }
            count += self.tiles[index + 1..]
                .iter()
                .filter(|&&b| b != blank && a > b)
                .count();
        }
        count
    }

    /// Checks whether the arrangement is reachable from the solved state.
    ///
    /// Standard 15-puzzle parity rule, generalized to size N: for odd N the
    /// arrangement is solvable iff the inversion count is even; for even N it
    /// is solvable iff the inversion count plus the number of rows below the
    /// blank is even. Every legal slide preserves this parity, so a layout
    /// only needs checking once, at scramble time.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::Board;
    ///
    /// // Identity with the last two tiles swapped: the classic unsolvable 14-15 swap
    /// let board = Board::from_tiles(4, {
    ///     let mut tiles: Vec<u16> = (0..16).collect();
    ///     tiles.swap(13, 14);
    ///     tiles
    /// })
    /// .unwrap();
    /// assert!(!board.is_solvable());
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let blank_row = self.position_of(self.blank).y();
            let rows_below = usize::from(self.size - 1 - blank_row);
            (inversions + rows_below) % 2 == 0
        }
    }

    /// Slides the tile at `index` into the blank, if the blank is adjacent.
    ///
    /// The four neighbors are examined in the fixed order left, right, up,
    /// down; the first one holding the blank is swapped with `index` and its
    /// position is returned. The order is fixed for determinism even though
    /// the blank is unique. Returns `None`, leaving the board untouched, when
    /// no neighbor holds the blank.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `size²`. Callers exposing untrusted
    /// indices should range-check first (the game layer reports this as an
    /// error instead).
    pub fn slide(&mut self, index: usize) -> Option<usize> {
        let cells = self.cell_count();
        assert!(
            index < cells,
            "index {index} out of range for a {cells}-cell board"
        );
        for neighbor in self.neighbors(index).into_iter().flatten() {
            if neighbor == self.blank {
                self.tiles.swap(index, neighbor);
                self.blank = index;
                return Some(neighbor);
            }
        }
        None
    }

    /// Neighbor candidates of `index` in left, right, up, down order, with
    /// edge positions filtered out.
    fn neighbors(&self, index: usize) -> [Option<usize>; 4] {
        let size = usize::from(self.size);
        let cells = self.cell_count();
        [
            (index % size != 0).then(|| index - 1),
            ((index + 1) % size != 0).then_some(index + 1),
            index.checked_sub(size),
            (index + size < cells).then_some(index + size),
        ]
    }
}

impl fmt::Display for Board {
    /// Formats the board as an aligned grid, one row per line, with the blank
    /// rendered as `_`. The output parses back via [`FromStr`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = self.blank_value();
        let width = blank.to_string().len();
        for (index, &tile) in self.tiles.iter().enumerate() {
            if index % usize::from(self.size) != 0 {
                write!(f, " ")?;
            }
            if tile == blank {
                write!(f, "{:>width$}", "_")?;
            } else {
                write!(f, "{tile:>width$}")?;
            }
            if (index + 1) % usize::from(self.size) == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors from parsing a board layout string.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseBoardError {
    /// A token was neither a tile value nor the `_` blank marker.
    #[display("invalid tile value: {_0}")]
    InvalidTile(#[from] ParseIntError),
    /// The token count is not a perfect square of a size 2 or larger.
    #[display("{_0} tiles do not form a square board of size 2 or larger")]
    NotSquare(#[error(not(source))] usize),
    /// The tokens do not form a permutation of `0..size²`.
    #[display("{_0}")]
    Layout(#[from] BoardError),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a whitespace-separated layout, inferring the size from the
    /// token count. The blank may be written as its numeric value or as `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::Board;
    ///
    /// let board: Board = "0 1\n3 2".parse().unwrap();
    /// assert_eq!(board.size(), 2);
    /// assert_eq!(board.blank_index(), 2);
    ///
    /// let round_trip: Board = board.to_string().parse().unwrap();
    /// assert_eq!(round_trip, board);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let size = (2..=u8::MAX)
            .find(|&n| usize::from(n) * usize::from(n) == tokens.len())
            .ok_or(ParseBoardError::NotSquare(tokens.len()))?;
        let blank = u16::from(size) * u16::from(size) - 1;
        let tiles = tokens
            .into_iter()
            .map(|token| {
                if token == "_" {
                    Ok(blank)
                } else {
                    token.parse()
                }
            })
            .collect::<Result<Vec<u16>, _>>()?;
        Ok(Self::from_tiles(size, tiles)?)
    }
}
