use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use cozy_chess::Square;
use utils::{grid_index, GRID_SIZE};

use crate::MetricError;

pub const NUM_SQUARES: usize = 64;

/// Widest cell in the text rendering of a map.
const MAX_CELL_WIDTH: usize = 5;

/// 8x8 reshape of a [`SquareMap`], row 0 being rank 8.
pub type Grid = [[f64; GRID_SIZE]; GRID_SIZE];

/// One number per square, indexed a1 = 0 through h8 = 63.
///
/// Arithmetic is elementwise and always yields a new map. Scalars broadcast to
/// every square for `+`, `-` and `*`; division is only defined between maps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareMap([f64; NUM_SQUARES]);

impl Default for SquareMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SquareMap {
    /// A map of zeros.
    pub const fn new() -> Self {
        Self([0.0; NUM_SQUARES])
    }

    pub fn from_slice(values: &[f64]) -> Result<Self, MetricError> {
        let values: [f64; NUM_SQUARES] = values
            .try_into()
            .map_err(|_| MetricError::Shape { len: values.len() })?;
        Ok(Self(values))
    }

    pub fn get(&self, index: usize) -> Result<f64, MetricError> {
        self.0.get(index).copied().ok_or(MetricError::Index { index })
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<(), MetricError> {
        let slot = self.0.get_mut(index).ok_or(MetricError::Index { index })?;
        *slot = value;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn abs(self) -> Self {
        self.map(f64::abs)
    }

    /// 1 where the value is non-zero, 0 elsewhere. NaN counts as non-zero.
    pub fn mask(self) -> Self {
        self.map(|v| if v != 0.0 { 1.0 } else { 0.0 })
    }

    /// Reshape into board orientation: `grid[row][col] == self[8 * (7 - row) + col]`.
    pub fn to_grid(&self) -> Grid {
        std::array::from_fn(|row| std::array::from_fn(|col| self.0[grid_index(row, col)]))
    }

    #[inline(always)]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self(self.0.map(f))
    }

    #[inline(always)]
    fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl From<[f64; NUM_SQUARES]> for SquareMap {
    fn from(values: [f64; NUM_SQUARES]) -> Self {
        Self(values)
    }
}

impl TryFrom<&[f64]> for SquareMap {
    type Error = MetricError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for SquareMap {
    type Error = MetricError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl Index<usize> for SquareMap {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl IndexMut<usize> for SquareMap {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

impl Index<Square> for SquareMap {
    type Output = f64;

    fn index(&self, square: Square) -> &f64 {
        &self.0[square as usize]
    }
}

impl IndexMut<Square> for SquareMap {
    fn index_mut(&mut self, square: Square) -> &mut f64 {
        &mut self.0[square as usize]
    }
}

macro_rules! elementwise {
    ($($trait:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl $trait for SquareMap {
                type Output = SquareMap;

                fn $method(self, rhs: SquareMap) -> SquareMap {
                    self.zip(rhs, |a, b| a $op b)
                }
            }
        )*
    };
}

macro_rules! broadcast {
    ($($trait:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl $trait<f64> for SquareMap {
                type Output = SquareMap;

                fn $method(self, rhs: f64) -> SquareMap {
                    self.map(|a| a $op rhs)
                }
            }
        )*
    };
}

macro_rules! broadcast_commuted {
    ($($trait:ident, $method:ident, $op:tt);* $(;)?) => {
        $(
            impl $trait<SquareMap> for f64 {
                type Output = SquareMap;

                fn $method(self, rhs: SquareMap) -> SquareMap {
                    rhs.map(|b| self $op b)
                }
            }
        )*
    };
}

elementwise!(
    Add, add, +;
    Sub, sub, -;
    Mul, mul, *;
    Div, div, /;
);

broadcast!(
    Add, add, +;
    Sub, sub, -;
    Mul, mul, *;
);

broadcast_commuted!(
    Add, add, +;
    Mul, mul, *;
);

impl Neg for SquareMap {
    type Output = SquareMap;

    fn neg(self) -> SquareMap {
        self.map(|v| -v)
    }
}

/// Eight lines, rank 8 first. Cells are right-aligned to the widest value and
/// cut to at most five characters.
impl fmt::Display for SquareMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        let width = cells
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_CELL_WIDTH);

        for rank in (0..GRID_SIZE).rev() {
            let row = cells[rank * GRID_SIZE..(rank + 1) * GRID_SIZE]
                .iter()
                .map(|c| format!("{:>width$}", c).chars().take(width).collect::<String>())
                .collect::<Vec<_>>()
                .join(" ");

            if rank > 0 {
                writeln!(f, "{}", row)?;
            } else {
                write!(f, "{}", row)?;
            }
        }
        Ok(())
    }
}
