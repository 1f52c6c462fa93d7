use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves,
    BitBoard, Board, Color, Piece, Square,
};

/// Read-only board-state service used by the metrics.
///
/// Implementors report the pieces of one color that attack a square. Only the
/// size of the returned set is consumed by the metrics, so test fakes can hand
/// back any bitboard of the right cardinality.
pub trait AttackSource {
    fn attackers(&self, color: Color, square: Square) -> BitBoard;
}

impl AttackSource for Board {
    #[inline(always)]
    fn attackers(&self, color: Color, square: Square) -> BitBoard {
        attackers(self, color, square)
    }
}

/// All pieces of `color` attacking `square`.
///
/// Works by reverse lookup: a piece attacks the square iff a piece of the same
/// kind standing on the square would attack it. Sliders are blocked by every
/// occupied square; pins and checks are ignored, and the king counts.
#[inline(always)]
pub fn attackers(board: &Board, color: Color, square: Square) -> BitBoard {
    let occupied = board.occupied();
    let our_pieces = board.colors(color);

    let pawns = board.pieces(Piece::Pawn) & our_pieces;
    let knights = board.pieces(Piece::Knight) & our_pieces;
    let bishops = board.pieces(Piece::Bishop) & our_pieces;
    let rooks = board.pieces(Piece::Rook) & our_pieces;
    let queens = board.pieces(Piece::Queen) & our_pieces;
    let kings = board.pieces(Piece::King) & our_pieces;

    let diagonal = bishops | queens;
    let orthogonal = rooks | queens;

    // Pawn attacks are asymmetric, so look backwards with the other color
    (get_pawn_attacks(square, !color) & pawns)
        | (get_knight_moves(square) & knights)
        | (get_king_moves(square) & kings)
        | (get_bishop_moves(square, occupied) & diagonal)
        | (get_rook_moves(square, occupied) & orthogonal)
}
