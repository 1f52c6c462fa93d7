use image::{imageops, RgbImage, RgbaImage};
use log::debug;
use utils::GRID_SIZE;

use crate::color::{build_colormap, Colormap, Heatmap};
use crate::fen::{parse_piece_placement, Placement};
use crate::{HeatmapError, PieceSet};

const BOARD_SQUARES: u32 = GRID_SIZE as u32;

#[inline(always)]
fn offset(row: usize, col: usize, width: u32) -> (i64, i64) {
    (col as i64 * width as i64, row as i64 * width as i64)
}

/// Solid `width`-pixel block of each square's color.
pub fn board_background(colormap: &Colormap, width: u32) -> RgbImage {
    let mut canvas = RgbImage::new(BOARD_SQUARES * width, BOARD_SQUARES * width);

    for (row, col, color) in colormap.iter() {
        let block = RgbImage::from_pixel(width, width, color.to_pixel());
        let (x, y) = offset(row, col, width);
        imageops::replace(&mut canvas, &block, x, y);
    }

    canvas
}

/// Transparent layer holding one piece tile per occupied square.
pub fn piece_layer(pieces: &PieceSet, placement: &Placement) -> Result<RgbaImage, HeatmapError> {
    let width = pieces.width();
    let mut layer = RgbaImage::new(BOARD_SQUARES * width, BOARD_SQUARES * width);

    for (row, rank) in placement.iter().enumerate() {
        for (col, code) in rank.chars().enumerate() {
            let tile = pieces.get(code).ok_or(HeatmapError::AssetLookup(code))?;
            let (x, y) = offset(row, col, width);
            imageops::replace(&mut layer, tile, x, y);
        }
    }

    Ok(layer)
}

/// Draw the position in `placement_field` over a board colored by `heatmap`.
///
/// Without a heatmap every square gets the neutral heat. Pieces are blended
/// onto the board by their alpha channel.
pub fn render(
    pieces: &PieceSet,
    placement_field: &str,
    heatmap: Option<&Heatmap>,
) -> Result<RgbImage, HeatmapError> {
    let placement = parse_piece_placement(placement_field)?;
    let foreground = piece_layer(pieces, &placement)?;

    let mut board = board_background(&build_colormap(heatmap), pieces.width());
    blend(&mut board, &foreground);

    debug!(
        "Rendered {} ({}x{}, overlay: {})",
        placement_field,
        board.width(),
        board.height(),
        heatmap.is_some()
    );

    Ok(board)
}

/// Paste `foreground` over `background` using its alpha as the mask.
fn blend(background: &mut RgbImage, foreground: &RgbaImage) {
    debug_assert_eq!(background.dimensions(), foreground.dimensions());

    for (bg, fg) in background.pixels_mut().zip(foreground.pixels()) {
        let alpha = fg.0[3] as u32;
        if alpha == 0 {
            continue;
        }
        for c in 0..3 {
            let mixed = fg.0[c] as u32 * alpha + bg.0[c] as u32 * (255 - alpha);
            bg.0[c] = ((mixed + 127) / 255) as u8;
        }
    }
}
