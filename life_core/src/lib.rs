//! Conway's Game of Life (B3/S23) on a bounded square grid.
//!
//! [`GridState`] tracks live cells in index lists so that each generation
//! costs time proportional to the population rather than the grid area.
//! Hosts seed cells with [`GridState::give_birth`] / [`GridState::kill`] and
//! step with [`GridState::analyze`] followed by [`GridState::advance`].

pub mod cells;
pub mod error;
pub mod grid;
pub mod neighborhood;
pub mod rules;
pub mod state;

pub use error::{LifeError, LifeResult};
pub use grid::{DEFAULT_WIDTH, GridConfig, MAX_WIDTH, Recycling};
pub use state::{GridState, Phase, Transition};
