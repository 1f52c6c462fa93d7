mod attacks;
mod coords;

pub use attacks::{attackers, AttackSource};
pub use coords::{grid_index, grid_to_square, GRID_SIZE};
