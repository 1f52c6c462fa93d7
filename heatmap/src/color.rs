use std::ops::Index;

use image::Rgb;
use utils::GRID_SIZE;

pub const COLD: Color = Color([30, 130, 230]);
pub const HOT: Color = Color([230, 30, 30]);

/// Fraction of each channel removed on dark squares.
pub const SHADE_FACTOR: f64 = 0.2;
/// Fraction of the distance to white added on light squares.
pub const TINT_FACTOR: f64 = 0.2;

/// Heat used on every square when there is no overlay.
pub const NEUTRAL: f64 = 0.5;

/// Overlay values in board orientation, row 0 being rank 8.
pub type Heatmap = [[f64; GRID_SIZE]; GRID_SIZE];

/// An RGB triple before it is written into an image.
///
/// Channels are not clamped: heat outside `[0, 1]` extrapolates past
/// [`COLD`] and [`HOT`], and only [`Color::to_pixel`] saturates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub [i32; 3]);

impl Color {
    pub fn to_pixel(self) -> Rgb<u8> {
        Rgb(self.0.map(|c| c.clamp(0, u8::MAX as i32) as u8))
    }

    #[inline(always)]
    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self(self.0.map(f))
    }
}

// Exact halves go to the even neighbour. Out-of-range values saturate at the
// `i32` bounds, which are still far outside what a pixel can show.
#[inline(always)]
fn round(value: f64) -> i32 {
    value.round_ties_even() as i32
}

/// Linear blend from [`COLD`] at `t = 0` to [`HOT`] at `t = 1`.
pub fn interpolate(t: f64) -> Color {
    Color(std::array::from_fn(|i| {
        let cold = COLD.0[i] as f64;
        let hot = HOT.0[i] as f64;
        round(cold + (hot - cold) * t)
    }))
}

/// Darken toward black.
pub fn shade(color: Color) -> Color {
    color.map(|c| round(c as f64 * (1.0 - SHADE_FACTOR)))
}

/// Lighten toward white.
pub fn tint(color: Color) -> Color {
    color.map(|c| {
        let c = c as f64;
        round(c + (255.0 - c) * TINT_FACTOR)
    })
}

/// Heat color of one square, tinted on light squares and shaded on dark ones.
///
/// `(0, 0)` is a8, a light square.
pub fn square_color(t: f64, row: usize, col: usize) -> Color {
    let color = interpolate(t);
    if (row + col) % 2 == 0 {
        tint(color)
    } else {
        shade(color)
    }
}

/// Resolved color of every square, in board orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colormap([[Color; GRID_SIZE]; GRID_SIZE]);

impl Colormap {
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.0[row][col]
    }

    /// Every square as `(row, col, color)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &color)| (row, col, color))
        })
    }
}

impl Index<(usize, usize)> for Colormap {
    type Output = Color;

    fn index(&self, (row, col): (usize, usize)) -> &Color {
        &self.0[row][col]
    }
}

/// Colors for a heatmap, or a flat neutral board when there is none.
pub fn build_colormap(heatmap: Option<&Heatmap>) -> Colormap {
    Colormap(std::array::from_fn(|row| {
        std::array::from_fn(|col| {
            let t = heatmap.map_or(NEUTRAL, |grid| grid[row][col]);
            square_color(t, row, col)
        })
    }))
}
