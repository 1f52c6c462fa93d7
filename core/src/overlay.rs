use clap::ValueEnum;
use cozy_chess::{Board, Square};
use heatmap::Heatmap;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use utils::grid_to_square;

/// What to paint under the pieces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Overlay {
    /// Flat neutral board
    None,
    /// Squares attacked by both sides
    Contested,
    /// Uniform noise in [0, 1), for eyeballing the color scale
    Random,
}

impl Overlay {
    pub fn name(self) -> &'static str {
        match self {
            Overlay::None => "Plain",
            Overlay::Contested => "Contested Squares",
            Overlay::Random => "Random",
        }
    }

    pub fn heatmap(self, board: &Board, seed: Option<u64>) -> Option<Heatmap> {
        match self {
            Overlay::None => None,
            Overlay::Contested => {
                let intensity = metrics::contested(board);
                debug!("{}:\n{}", self.name(), intensity);
                Some(intensity.to_grid())
            }
            Overlay::Random => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                Some(std::array::from_fn(|_| std::array::from_fn(|_| rng.gen())))
            }
        }
    }
}

/// Square with the largest heat, first in reading order on ties.
pub fn hottest(heatmap: &Heatmap) -> Option<(Square, f64)> {
    let mut best: Option<(Square, f64)> = None;

    for (row, cells) in heatmap.iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if best.map_or(true, |(_, top)| value > top) {
                best = Some((grid_to_square(row, col), value));
            }
        }
    }

    best
}
