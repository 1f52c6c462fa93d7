use utils::GRID_SIZE;

use crate::HeatmapError;

/// Piece letters of a FEN placement, black first.
pub const PIECE_CODES: &str = "rnbqkpRNBQKP";

/// Marker for an empty square in an expanded rank.
pub const EMPTY_SQUARE: char = ' ';

/// Eight ranks of eight characters, rank 8 first.
pub type Placement = [String; GRID_SIZE];

/// The piece-placement field of a full FEN string.
pub fn placement_field(fen: &str) -> &str {
    fen.split_whitespace().next().unwrap_or_default()
}

/// Expand a FEN placement such as `3P4/k1K5/8/8/8/8/8/8` into rank strings.
///
/// Digits become that many [`EMPTY_SQUARE`]s, so the example yields
/// `"   P    "` and `"k K     "` followed by six empty ranks.
pub fn parse_piece_placement(field: &str) -> Result<Placement, HeatmapError> {
    let mut expanded = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));
    for ch in field.chars() {
        match ch {
            '1'..='8' => {
                let run = ch as usize - '0' as usize;
                expanded.extend(std::iter::repeat(EMPTY_SQUARE).take(run));
            }
            _ => expanded.push(ch),
        }
    }

    let ranks: Placement = expanded
        .split('/')
        .map(str::to_owned)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|ranks: Vec<String>| {
            HeatmapError::FenFormat(format!("expected 8 ranks, found {}", ranks.len()))
        })?;

    for (row, rank) in ranks.iter().enumerate() {
        let rank_number = GRID_SIZE - row;

        if let Some(ch) = rank
            .chars()
            .find(|&ch| ch != EMPTY_SQUARE && !PIECE_CODES.contains(ch))
        {
            return Err(HeatmapError::FenFormat(format!(
                "unexpected {:?} in rank {}",
                ch, rank_number
            )));
        }

        let squares = rank.chars().count();
        if squares != GRID_SIZE {
            return Err(HeatmapError::FenFormat(format!(
                "rank {} has {} squares",
                rank_number, squares
            )));
        }
    }

    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_empty_runs() {
        let ranks = parse_piece_placement("3P4/k1K5/8/8/8/8/8/8").unwrap();
        assert_eq!(ranks[0], "   P    ");
        assert_eq!(ranks[1], "k K     ");
        assert!(ranks[2..].iter().all(|rank| rank == "        "));
    }

    #[test]
    fn test_starting_position() {
        let ranks = parse_piece_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR").unwrap();
        assert_eq!(ranks[0], "rnbqkbnr");
        assert_eq!(ranks[6], "PPPPPPPP");
        assert_eq!(ranks[7], "RNBQKBNR");
    }

    #[test]
    fn test_too_few_ranks() {
        let err = parse_piece_placement("3P4/k1K5").unwrap_err();
        assert!(matches!(err, HeatmapError::FenFormat(_)));
        assert_eq!(err.to_string(), "invalid piece placement: expected 8 ranks, found 2");
    }

    #[test]
    fn test_rank_width() {
        assert!(matches!(
            parse_piece_placement("9/8/8/8/8/8/8/8"),
            Err(HeatmapError::FenFormat(_))
        ));
        assert!(matches!(
            parse_piece_placement("7/8/8/8/8/8/8/8"),
            Err(HeatmapError::FenFormat(_))
        ));
        assert!(matches!(
            parse_piece_placement("ppppppppp/8/8/8/8/8/8/8"),
            Err(HeatmapError::FenFormat(_))
        ));
    }

    #[test]
    fn test_unknown_piece() {
        let err = parse_piece_placement("8/8/8/3x4/8/8/8/8").unwrap_err();
        assert_eq!(err.to_string(), "invalid piece placement: unexpected 'x' in rank 5");
    }

    #[test]
    fn test_placement_field() {
        assert_eq!(
            placement_field("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
        assert_eq!(placement_field("8/8/8/8/8/8/8/8"), "8/8/8/8/8/8/8/8");
        assert_eq!(placement_field(""), "");
    }
}
