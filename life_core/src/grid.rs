// grid.rs - Grid geometry and configuration for Conway's Game of Life

use serde::{Deserialize, Serialize};

use crate::error::{LifeError, LifeResult};

pub const DEFAULT_WIDTH: usize = 100;       // 100x100 playing area
pub const MAX_WIDTH: usize = 1 << 15;       // Keeps area (and slot indices) inside u32

/// Whether released cell buffers are kept for reuse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recycling {
    #[default]
    Enabled,
    Disabled,
}

/// Construction-time grid parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Cells per side; the grid holds `width * width` cells
    pub width: usize,

    /// Buffer recycling between generations
    pub recycling: Recycling,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            recycling: Recycling::default(),
        }
    }
}

impl GridConfig {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> LifeResult<()> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(LifeError::InvalidWidth {
                width: self.width,
                max: MAX_WIDTH,
            });
        }
        Ok(())
    }

    pub fn area(&self) -> usize {
        self.width * self.width
    }
}
