// config.rs - Viewer configuration: JSON file plus command-line overrides

use std::path::Path;
use std::time::Duration;

use life_core::{GridConfig, LifeError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that stop the viewer from starting
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Grid error: {0}")]
    Grid(#[from] LifeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Window error: {0}")]
    Window(String),
}

impl ViewerError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub const MIN_CELL_SIZE: f32 = 1.0;     // Pixels per cell at zoom 1.0

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Grid width and buffer recycling
    pub grid: GridConfig,

    /// Cell side in pixels at zoom 1.0
    pub cell_size: f32,

    /// Time between generations while running
    pub update_interval_ms: u64,

    /// Live-cell probability for the random fill
    pub random_density: f64,

    /// Initial window size in points
    pub window_size: [f32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            cell_size: 15.0,
            update_interval_ms: 60,
            random_density: 0.25,
            window_size: [800.0, 950.0],
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        self.grid.validate()?;
        if !(self.cell_size >= MIN_CELL_SIZE) {
            return Err(ViewerError::config(format!(
                "cell_size must be at least {MIN_CELL_SIZE}, got {}",
                self.cell_size
            )));
        }
        if self.update_interval_ms == 0 {
            return Err(ViewerError::config("update_interval_ms must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.random_density) {
            return Err(ViewerError::config(format!(
                "random_density must be within 0..=1, got {}",
                self.random_density
            )));
        }
        Ok(())
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    /// Sets the interval from a generations-per-second rate.
    pub fn set_speed(&mut self, generations_per_sec: f32) {
        if generations_per_sec > 0.0 {
            self.update_interval_ms = ((1000.0 / generations_per_sec) as u64).max(1);
        }
    }
}
