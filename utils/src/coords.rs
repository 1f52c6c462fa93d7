// Grid coordinates as the board is drawn: row 0 is rank 8 and row 7 is rank 1,
// column 0 is the a-file and column 7 the h-file. Square indices follow the
// usual a1 = 0, b1 = 1, ..., h8 = 63 layout.

use cozy_chess::Square;

/// Number of rows (and columns) on the board.
pub const GRID_SIZE: usize = 8;

/// Square index shown at grid position `(row, col)`.
#[inline(always)]
pub const fn grid_index(row: usize, col: usize) -> usize {
    GRID_SIZE * (GRID_SIZE - 1 - row) + col
}

/// Square shown at grid position `(row, col)`. Panics if either is above 7.
#[inline(always)]
pub fn grid_to_square(row: usize, col: usize) -> Square {
    assert!(row < GRID_SIZE && col < GRID_SIZE, "grid position out of range");
    Square::index(grid_index(row, col))
}
