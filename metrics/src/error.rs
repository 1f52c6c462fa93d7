use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    #[error("square map needs exactly 64 values, got {len}")]
    Shape { len: usize },

    #[error("square index {index} is out of range 0..=63")]
    Index { index: usize },
}
