use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("invalid piece placement: {0}")]
    FenFormat(String),

    #[error("no piece image for {0:?}")]
    AssetLookup(char),

    #[error("more than one piece image for {0:?}")]
    AssetDuplicate(char),

    #[error("piece image {code:?} is {width}x{height}, expected {expected}x{expected}")]
    AssetSize {
        code: char,
        width: u32,
        height: u32,
        expected: u32,
    },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
