use std::path::Path;

use image::{Rgba, RgbaImage};
use log::debug;

use crate::fen::{EMPTY_SQUARE, PIECE_CODES};
use crate::HeatmapError;

const NUM_PIECE_CODES: usize = 12;

pub(crate) const WHITE_FILL: Rgba<u8> = Rgba([245, 245, 245, 255]);
pub(crate) const BLACK_FILL: Rgba<u8> = Rgba([25, 25, 25, 255]);
const WHITE_OUTLINE: Rgba<u8> = Rgba([40, 40, 40, 255]);
const BLACK_OUTLINE: Rgba<u8> = Rgba([215, 215, 215, 255]);

/// Square piece images, one per FEN letter, all of the same width.
///
/// Built once at startup and shared by reference afterwards. The empty square
/// maps to a fully transparent tile.
pub struct PieceSet {
    width: u32,
    tiles: Vec<RgbaImage>,
    blank: RgbaImage,
}

impl PieceSet {
    /// Load `<letter>.png` for every piece letter in `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, HeatmapError> {
        let dir = dir.as_ref();

        let tiles = PIECE_CODES
            .chars()
            .map(|code| {
                let path = dir.join(format!("{}.png", code));
                debug!("Loading piece image {}", path.display());
                Ok((code, image::open(&path)?.into_rgba8()))
            })
            .collect::<Result<Vec<_>, HeatmapError>>()?;

        Self::from_tiles(tiles)
    }

    /// Build from in-memory tiles. Every piece letter must be present exactly
    /// once, and all tiles must be square with one shared width.
    pub fn from_tiles(
        tiles: impl IntoIterator<Item = (char, RgbaImage)>,
    ) -> Result<Self, HeatmapError> {
        let mut slots: [Option<RgbaImage>; NUM_PIECE_CODES] = Default::default();
        for (code, tile) in tiles {
            let slot = slot_of(code).ok_or(HeatmapError::AssetLookup(code))?;
            if slots[slot].replace(tile).is_some() {
                return Err(HeatmapError::AssetDuplicate(code));
            }
        }

        let mut width = None;
        let mut checked = Vec::with_capacity(NUM_PIECE_CODES);

        for (code, slot) in PIECE_CODES.chars().zip(slots) {
            let tile = slot.ok_or(HeatmapError::AssetLookup(code))?;
            let expected = *width.get_or_insert(tile.width());

            if tile.width() != expected || tile.height() != expected {
                return Err(HeatmapError::AssetSize {
                    code,
                    width: tile.width(),
                    height: tile.height(),
                    expected,
                });
            }
            checked.push(tile);
        }

        let width = width.unwrap_or_default();
        Ok(Self {
            width,
            tiles: checked,
            blank: RgbaImage::new(width, width),
        })
    }

    /// Generated discs for when no image files are at hand: light discs for
    /// White, dark discs for Black, larger for more valuable pieces.
    pub fn placeholder(width: u32) -> Self {
        let tiles = PIECE_CODES
            .chars()
            .map(|code| disc(code, width))
            .collect();

        Self {
            width,
            tiles,
            blank: RgbaImage::new(width, width),
        }
    }

    /// Side length of every tile in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Tile for a piece letter, or the transparent tile for an empty square.
    pub fn get(&self, code: char) -> Option<&RgbaImage> {
        if code == EMPTY_SQUARE {
            return Some(&self.blank);
        }
        slot_of(code).map(|slot| &self.tiles[slot])
    }
}

#[inline(always)]
fn slot_of(code: char) -> Option<usize> {
    PIECE_CODES.find(code)
}

fn disc(code: char, width: u32) -> RgbaImage {
    let (fill, outline) = if code.is_ascii_uppercase() {
        (WHITE_FILL, WHITE_OUTLINE)
    } else {
        (BLACK_FILL, BLACK_OUTLINE)
    };

    // Radius as a fraction of the tile
    let scale = match code.to_ascii_lowercase() {
        'p' => 0.26,
        'n' | 'b' => 0.32,
        'r' => 0.36,
        'q' => 0.40,
        _ => 0.44,
    };

    let center = width as f64 / 2.0;
    let radius = width as f64 * scale;
    let border = (width as f64 / 32.0).max(1.0);

    let mut tile = RgbaImage::new(width, width);
    for (x, y, pixel) in tile.enumerate_pixels_mut() {
        let dx = x as f64 + 0.5 - center;
        let dy = y as f64 + 0.5 - center;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance <= radius - border {
            *pixel = fill;
        } else if distance <= radius {
            *pixel = outline;
        }
    }
    tile
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([200, 10, 10, 255]))
    }

    fn full_set(width: u32) -> Vec<(char, RgbaImage)> {
        PIECE_CODES.chars().map(|c| (c, solid(width, width))).collect()
    }

    #[test]
    fn test_placeholder_shapes() {
        let pieces = PieceSet::placeholder(32);
        assert_eq!(pieces.width(), 32);

        for code in PIECE_CODES.chars() {
            let tile = pieces.get(code).unwrap();
            assert_eq!(tile.dimensions(), (32, 32));
            // Opaque center, transparent corner
            assert_eq!(tile.get_pixel(16, 16)[3], 255);
            assert_eq!(tile.get_pixel(0, 0)[3], 0);
        }

        assert_eq!(*pieces.get('K').unwrap().get_pixel(16, 16), WHITE_FILL);
        assert_eq!(*pieces.get('k').unwrap().get_pixel(16, 16), BLACK_FILL);
    }

    #[test]
    fn test_blank_tile_is_transparent() {
        let pieces = PieceSet::placeholder(16);
        let blank = pieces.get(EMPTY_SQUARE).unwrap();
        assert_eq!(blank.dimensions(), (16, 16));
        assert!(blank.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_unknown_code() {
        let pieces = PieceSet::placeholder(16);
        assert!(pieces.get('x').is_none());
        assert!(pieces.get('1').is_none());
    }

    #[test]
    fn test_from_tiles() {
        let pieces = PieceSet::from_tiles(full_set(24)).unwrap();
        assert_eq!(pieces.width(), 24);
        assert_eq!(pieces.get('Q').unwrap().get_pixel(0, 0), &Rgba([200, 10, 10, 255]));
    }

    #[test]
    fn test_from_tiles_missing_piece() {
        let tiles = full_set(24).into_iter().filter(|(c, _)| *c != 'q');
        assert!(matches!(
            PieceSet::from_tiles(tiles),
            Err(HeatmapError::AssetLookup('q'))
        ));
    }

    #[test]
    fn test_from_tiles_unknown_letter() {
        let mut tiles = full_set(24);
        tiles.push(('z', solid(24, 24)));
        assert!(matches!(
            PieceSet::from_tiles(tiles),
            Err(HeatmapError::AssetLookup('z'))
        ));
    }

    #[test]
    fn test_from_tiles_duplicate_letter() {
        let mut tiles = full_set(24);
        tiles.push(('N', solid(24, 24)));
        assert!(matches!(
            PieceSet::from_tiles(tiles),
            Err(HeatmapError::AssetDuplicate('N'))
        ));
    }

    #[test]
    fn test_from_tiles_size_mismatch() {
        let mut tiles = full_set(24);
        tiles[5].1 = solid(24, 20);
        assert!(matches!(
            PieceSet::from_tiles(tiles),
            Err(HeatmapError::AssetSize {
                code: 'p',
                width: 24,
                height: 20,
                expected: 24
            })
        ));

        let mut tiles = full_set(24);
        tiles[11].1 = solid(30, 30);
        assert!(matches!(
            PieceSet::from_tiles(tiles),
            Err(HeatmapError::AssetSize { code: 'P', .. })
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let source = PieceSet::placeholder(20);
        for code in PIECE_CODES.chars() {
            source
                .get(code)
                .unwrap()
                .save(dir.path().join(format!("{}.png", code)))
                .unwrap();
        }

        let pieces = PieceSet::load(dir.path()).unwrap();
        assert_eq!(pieces.width(), 20);
        assert_eq!(pieces.get('n'), source.get('n'));
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = PieceSet::load(dir.path().join("missing"));
        assert!(matches!(result, Err(HeatmapError::Image(_))));
    }
}
