// error.rs - Error values for grid mutation and generation stepping

use thiserror::Error;

/// Everything the grid can refuse to do.
///
/// Cell rejections leave the state untouched, so a host is free to ignore
/// them or log them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeError {
    /// Index does not name a cell on the grid
    #[error("cell index {index} is outside the grid (area {area})")]
    OutOfBounds { index: i64, area: usize },

    /// Birth requested for a cell that is already alive
    #[error("cell {0} is already alive")]
    AlreadyAlive(usize),

    /// Kill requested for a cell that is already dead
    #[error("cell {0} is already dead")]
    AlreadyDead(usize),

    /// `advance` called without a prior `analyze`
    #[error("generation {generation} has not been analyzed")]
    NotAnalyzed { generation: u64 },

    /// Grid width of zero or too large to index
    #[error("invalid grid width {width} (expected 1..={max})")]
    InvalidWidth { width: usize, max: usize },
}

/// Result type for grid operations
pub type LifeResult<T> = Result<T, LifeError>;

impl LifeError {
    /// True for the three cell-level rejections (out of range, redundant birth, redundant kill).
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. } | Self::AlreadyAlive(_) | Self::AlreadyDead(_)
        )
    }
}
