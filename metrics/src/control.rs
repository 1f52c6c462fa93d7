use cozy_chess::{Color, Square};
use log::trace;
use utils::AttackSource;

use crate::SquareMap;

/// Number of attackers on every square, for White and for Black.
///
/// Issues one attacker query per square and color (128 in total).
pub fn control<B: AttackSource + ?Sized>(board: &B) -> (SquareMap, SquareMap) {
    let mut white = SquareMap::new();
    let mut black = SquareMap::new();

    for square in Square::ALL {
        white[square] = board.attackers(Color::White, square).len() as f64;
        black[square] = board.attackers(Color::Black, square).len() as f64;
    }

    (white, black)
}

/// Squares fought over by both sides.
///
/// Each side's count only contributes where the other side attacks too, and
/// the sum is damped by the imbalance between the two counts. The result is
/// not normalized; values are typically small non-negative numbers.
pub fn contested<B: AttackSource + ?Sized>(board: &B) -> SquareMap {
    let (white, black) = control(board);

    let intensity =
        (white * black.mask() + black * white.mask()) / ((white - black).abs() + 1.0);

    trace!(
        "contested: {} squares attacked by both sides",
        intensity.mask().iter().sum::<f64>()
    );

    intensity
}
