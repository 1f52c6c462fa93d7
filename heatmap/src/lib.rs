//! Board images with a per-square color overlay.
//!
//! A heatmap (an 8x8 grid of values, nominally in `[0, 1]`) is turned into a
//! [`Colormap`] by blending between a cold and a hot color, then lightening
//! light squares and darkening dark ones. [`render`] paints that colormap as
//! the board and draws the pieces of a FEN placement on top.

mod color;
mod compose;
mod error;
mod fen;
mod pieces;

pub use color::{
    build_colormap, interpolate, shade, square_color, tint, Color, Colormap, Heatmap, COLD, HOT,
    NEUTRAL, SHADE_FACTOR, TINT_FACTOR,
};
pub use compose::{board_background, piece_layer, render};
pub use error::HeatmapError;
pub use fen::{parse_piece_placement, placement_field, Placement, EMPTY_SQUARE, PIECE_CODES};
pub use pieces::PieceSet;
