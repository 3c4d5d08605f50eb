//! Canvas geometry: the pure pixel↔grid mapping shared by renderer and input
//! collaborators.
//!
//! The engine itself only works with grid indices. Translating a pointer
//! event into an index, or an index into the pixel rectangle to redraw, is a
//! pure function of the canvas dimensions and the grid size; this module is
//! that function, so both collaborators agree on one mapping.

use crate::Position;

/// Pixel-space geometry of an N×N board drawn on a fixed-size canvas.
///
/// # Examples
///
/// ```
/// use slidelace_core::CanvasGeometry;
///
/// let geometry = CanvasGeometry::new(640, 640, 4).unwrap();
/// assert_eq!(geometry.cell_width(), 160.0);
///
/// // A click lands in the cell containing it
/// assert_eq!(geometry.index_at(10.0, 10.0), Some(0));
/// assert_eq!(geometry.index_at(170.0, 10.0), Some(1));
/// assert_eq!(geometry.index_at(170.0, 170.0), Some(5));
///
/// // Outside the canvas there is no cell
/// assert_eq!(geometry.index_at(-1.0, 10.0), None);
/// assert_eq!(geometry.index_at(10.0, 640.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGeometry {
    width: u32,
    height: u32,
    size: u8,
}

/// Errors from constructing a [`CanvasGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    /// The canvas has a zero dimension.
    #[display("canvas dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },
    /// The grid dimension is below the 2×2 minimum.
    #[display("grid size must be at least 2, got {size}")]
    SizeTooSmall {
        /// The rejected dimension.
        size: u8,
    },
}

/// The pixel rectangle of a single cell.
///
/// The same rectangle serves as the destination region of a grid position and
/// as the source region of a tile value within the puzzle image, since both
/// use the row-major mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// Left edge in pixels.
    pub x: f64,
    /// Top edge in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl CanvasGeometry {
    /// Creates a geometry for a `size`×`size` grid on a `width`×`height` canvas.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroDimension`] if either canvas dimension is
    /// zero, and [`GeometryError::SizeTooSmall`] if `size < 2`.
    pub fn new(width: u32, height: u32, size: u8) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::ZeroDimension { width, height });
        }
        if size < 2 {
            return Err(GeometryError::SizeTooSmall { size });
        }
        Ok(Self {
            width,
            height,
            size,
        })
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub const fn size(&self) -> u8 {
        self.size
    }

    /// Returns the width of one cell in pixels.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        f64::from(self.width) / f64::from(self.size)
    }

    /// Returns the height of one cell in pixels.
    #[must_use]
    pub fn cell_height(&self) -> f64 {
        f64::from(self.height) / f64::from(self.size)
    }

    /// Maps a pointer coordinate to the grid index of the cell containing it.
    ///
    /// Uses `row = floor(y / cell_height)`, `col = floor(x / cell_width)`,
    /// `index = row·N + col`. Returns `None` for coordinates outside the
    /// canvas (including negative or non-finite ones).
    #[must_use]
    pub fn index_at(&self, x: f64, y: f64) -> Option<usize> {
        if !(0.0..f64::from(self.width)).contains(&x)
            || !(0.0..f64::from(self.height)).contains(&y)
        {
            return None;
        }
        // The range checks above bound both quotients to [0, size)
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let col = (x / self.cell_width()) as usize;
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = (y / self.cell_height()) as usize;
        Some(row * usize::from(self.size) + col)
    }

    /// Returns the pixel rectangle of a grid index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `size²`.
    #[must_use]
    pub fn cell_rect(&self, index: usize) -> CellRect {
        let pos = Position::from_index(index, self.size);
        CellRect {
            x: f64::from(pos.x()) * self.cell_width(),
            y: f64::from(pos.y()) * self.cell_height(),
            width: self.cell_width(),
            height: self.cell_height(),
        }
    }
}
