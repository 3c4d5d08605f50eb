//! Construction-time configuration surface.

use crate::geometry::{CanvasGeometry, GeometryError};

/// The configuration bundle consumed once when a puzzle is set up.
///
/// This mirrors the classic canvas-puzzle construction surface: canvas pixel
/// dimensions, the grid dimension, the puzzle image, whether tile numbers are
/// overlaid as hints, and whether the board is scrambled or starts from the
/// fixed default layout. `img_src` and `show_hint` are renderer-only
/// passthrough data; the engine never reads them.
///
/// # Examples
///
/// ```
/// use slidelace_core::CanvasConfig;
///
/// let config = CanvasConfig {
///     tile_size: 3,
///     scramble: true,
///     ..CanvasConfig::default()
/// };
/// let geometry = config.geometry().unwrap();
/// assert_eq!(geometry.cell_width(), 640.0 / 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Grid dimension N (the board has N² cells).
    pub tile_size: u8,
    /// Image resource identifier, used only by the renderer.
    pub img_src: String,
    /// Whether the renderer overlays tile numbers as hints.
    pub show_hint: bool,
    /// Whether to generate a random solvable scramble instead of the fixed
    /// default layout.
    pub scramble: bool,
}

impl Default for CanvasConfig {
    /// The classic defaults: a 640×640 canvas, a 4×4 grid, the `lion.png`
    /// image, no hints, no scramble.
    fn default() -> Self {
        Self {
            canvas_width: 640,
            canvas_height: 640,
            tile_size: 4,
            img_src: "lion.png".to_owned(),
            show_hint: false,
            scramble: false,
        }
    }
}

impl CanvasConfig {
    /// Derives the pixel↔grid mapping from this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the canvas dimensions or grid size are
    /// invalid.
    pub fn geometry(&self) -> Result<CanvasGeometry, GeometryError> {
        CanvasGeometry::new(self.canvas_width, self.canvas_height, self.tile_size)
    }
}
