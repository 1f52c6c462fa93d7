// Per-square board statistics.
//
// A `SquareMap` holds one number per square. The board metrics fill maps by
// querying an `AttackSource`, which `cozy_chess::Board` implements through the
// `utils` crate; any other read-only board-state service can stand in for it.

mod control;
mod error;
mod square_map;

pub use control::{contested, control};
pub use error::MetricError;
pub use square_map::{Grid, SquareMap, NUM_SQUARES};
pub use utils::AttackSource;
