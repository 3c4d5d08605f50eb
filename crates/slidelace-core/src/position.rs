//! Grid coordinate representation.

use std::fmt::{self, Display};

/// An (x, y) coordinate on an N×N board.
///
/// Positions convert to and from row-major indices (`index = y·N + x`), which
/// is how [`Board`](crate::Board) and its callers address cells.
///
/// # Examples
///
/// ```
/// use slidelace_core::Position;
///
/// let pos = Position::from_index(7, 4);
/// assert_eq!(pos, Position::new(3, 1));
/// assert_eq!(pos.to_index(4), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Creates a position from a row-major index on a board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `size²`.
    #[must_use]
    pub fn from_index(index: usize, size: u8) -> Self {
        let cells = usize::from(size) * usize::from(size);
        assert!(
            index < cells,
            "index {index} out of range for a {cells}-cell board"
        );
        #[expect(clippy::cast_possible_truncation)]
        let x = (index % usize::from(size)) as u8;
        #[expect(clippy::cast_possible_truncation)]
        let y = (index / usize::from(size)) as u8;
        Self { x, y }
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major index of this position on a board of the given size.
    #[must_use]
    pub fn to_index(self, size: u8) -> usize {
        usize::from(self.y) * usize::from(size) + usize::from(self.x)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
