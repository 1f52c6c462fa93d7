use cozy_chess::util::parse_uci_move;
use cozy_chess::{Board, FenParseError};
use log::debug;
use thiserror::Error;

/// Stand-in accepted by `--fen` for the standard starting position.
pub const DEFAULT_FEN: &str = "default";

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("invalid FEN {fen:?}: {error}")]
    Fen { fen: String, error: FenParseError },

    #[error("cannot parse move {0:?}")]
    Unparsable(String),

    #[error("illegal move {0:?}")]
    Illegal(String),
}

/// Board after playing `moves` from `fen`.
pub fn setup(fen: &str, moves: &[String]) -> Result<Board, PositionError> {
    let mut board = if fen == DEFAULT_FEN {
        Board::default()
    } else {
        Board::from_fen(fen, false).map_err(|error| PositionError::Fen {
            fen: fen.to_string(),
            error,
        })?
    };

    for mv_str in moves {
        let mv = parse_uci_move(&board, mv_str)
            .map_err(|_| PositionError::Unparsable(mv_str.clone()))?;

        if !board.is_legal(mv) {
            return Err(PositionError::Illegal(mv_str.clone()));
        }

        debug!("Playing {}", mv_str);
        board.play_unchecked(mv);
    }

    Ok(board)
}
