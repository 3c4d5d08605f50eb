//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the board representation and pure geometry helpers that
//! the scramble generator, the game session layer, and UI collaborators build on.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Board arrangement** - The tile permutation itself
//!    - [`board`]: [`Board`], an N×N arrangement of tile values with a single
//!      blank, plus the solvability check and the slide primitive
//!    - [`position`]: [`Position`], an (x, y) grid coordinate paired with
//!      row-major index conversions
//!
//! 2. **Canvas geometry** - The pure pixel↔grid mapping
//!    - [`geometry`]: [`CanvasGeometry`] translates pointer coordinates into
//!      grid indices and grid indices into pixel rectangles, so renderer and
//!      input collaborators share one mapping
//!
//! 3. **Configuration surface** - Construction-time knobs
//!    - [`config`]: [`CanvasConfig`], the bundle of canvas dimensions, grid
//!      size, and presentation options consumed once at game start
//!
//! # Examples
//!
//! ```
//! use slidelace_core::Board;
//!
//! // The classic fixed 4×4 starting arrangement
//! let mut board = Board::default_layout(4).unwrap();
//! assert!(!board.is_solved());
//!
//! // The blank sits at index 14; sliding the tile to its left succeeds
//! assert_eq!(board.blank_index(), 14);
//! assert_eq!(board.slide(13), Some(14));
//! assert_eq!(board.blank_index(), 13);
//! ```

pub mod board;
pub mod config;
pub mod geometry;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError, ParseBoardError},
    config::CanvasConfig,
    geometry::{CanvasGeometry, CellRect, GeometryError},
    position::Position,
};
