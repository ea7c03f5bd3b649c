// state.rs - Grid State: cell occupancy, work lists and generation transitions
//
// Cost per generation is proportional to the live population: only live cells
// and their dead neighbors are ever examined.

use std::mem;

use tracing::{debug, trace};

use crate::cells::{AliveCells, CellPool};
use crate::error::{LifeError, LifeResult};
use crate::grid::{GridConfig, Recycling};
use crate::neighborhood;
use crate::rules;

/// Where the state sits in the analyze/advance cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Dying and becoming-alive lists are current; `advance` may run
    Analyzed,
}

/// Summary of one applied generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Generation number after the transition
    pub generation: u64,
    pub births: usize,
    pub deaths: usize,
    pub population: usize,
}

pub struct GridState {
    width: usize,
    cells: Vec<bool>,
    analyzed: Vec<bool>,        // Dead candidates already evaluated this pass
    marked: Vec<usize>,         // Indices set in `analyzed`, for O(marked) clearing
    alive: AliveCells,
    dying: Vec<usize>,
    becoming_alive: Vec<usize>,
    pool: CellPool,
    population: usize,
    generation: u64,
    phase: Phase,
}

impl Default for GridState {
    fn default() -> Self {
        Self::from_valid(GridConfig::default())
    }
}

impl GridState {
    pub fn new(config: GridConfig) -> LifeResult<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    pub fn with_width(width: usize) -> LifeResult<Self> {
        Self::new(GridConfig::with_width(width))
    }

    fn from_valid(config: GridConfig) -> Self {
        let area = config.area();
        Self {
            width: config.width,
            cells: vec![false; area],
            analyzed: vec![false; area],
            marked: Vec::new(),
            alive: AliveCells::new(area),
            dying: Vec::new(),
            becoming_alive: Vec::new(),
            pool: CellPool::new(config.recycling),
            population: 0,
            generation: 0,
            phase: Phase::Idle,
        }
    }

    /// Back to the creation state, keeping the grid allocation.
    pub fn restart(&mut self) {
        debug!(
            "Restarting grid at generation {} (population {})",
            self.generation, self.population
        );
        self.discard_analysis();
        self.alive.clear();
        self.cells.fill(false);
        self.population = 0;
        self.generation = 0;
    }

    /// Brings the cell at `index` to life immediately.
    pub fn give_birth(&mut self, index: i64) -> LifeResult<()> {
        let cell = self.cell_index(index)?;
        if self.cells[cell] {
            return Err(LifeError::AlreadyAlive(cell));
        }
        self.cells[cell] = true;
        self.alive.insert(cell);
        self.population += 1;
        Ok(())
    }

    /// Kills the cell at `index` immediately, without waiting for a transition.
    pub fn kill(&mut self, index: i64) -> LifeResult<()> {
        let cell = self.cell_index(index)?;
        if !self.cells[cell] {
            return Err(LifeError::AlreadyDead(cell));
        }
        self.cells[cell] = false;
        self.alive.remove(cell);
        self.population -= 1;
        Ok(())
    }

    /// Computes which cells die and which are born at the next transition.
    ///
    /// The grid is left untouched. Calling this again before `advance`
    /// throws the previous results away and recomputes.
    pub fn analyze(&mut self) {
        if self.phase == Phase::Analyzed {
            debug!("Generation {} analyzed twice, recomputing", self.generation);
            self.discard_analysis();
        }

        let mut dying = self.pool.take();
        let mut becoming_alive = self.pool.take();

        for &cell in self.alive.as_slice() {
            let survey = neighborhood::survey(&self.cells, self.width, cell);
            if !rules::next_state(true, survey.live) {
                dying.push(cell);
            }

            for &candidate in &survey.dead {
                if self.analyzed[candidate] {
                    continue;
                }
                self.analyzed[candidate] = true;
                self.marked.push(candidate);

                let live = neighborhood::count_live(&self.cells, self.width, candidate);
                if rules::next_state(false, live) {
                    becoming_alive.push(candidate);
                }
            }
        }

        self.dying = dying;
        self.becoming_alive = becoming_alive;
        self.phase = Phase::Analyzed;
    }

    /// Applies the last analysis and moves to the next generation.
    pub fn advance(&mut self) -> LifeResult<Transition> {
        if self.phase != Phase::Analyzed {
            return Err(LifeError::NotAnalyzed {
                generation: self.generation,
            });
        }
        Ok(self.apply())
    }

    /// `analyze` followed by `advance`.
    pub fn step(&mut self) -> Transition {
        self.analyze();
        self.apply()
    }

    fn apply(&mut self) -> Transition {
        // Cells killed out of band since the analysis are already dead
        let dying = mem::take(&mut self.dying);
        let mut deaths = 0;
        for &cell in &dying {
            if self.cells[cell] {
                self.cells[cell] = false;
                self.population -= 1;
                deaths += 1;
            }
        }
        self.pool.release(dying);

        // Likewise cells born out of band are already alive
        let mut becoming_alive = mem::take(&mut self.becoming_alive);
        becoming_alive.retain(|&cell| !self.cells[cell]);
        for &cell in &becoming_alive {
            self.cells[cell] = true;
        }
        let births = becoming_alive.len();
        self.population += births;
        self.alive.append(&mut becoming_alive);
        self.pool.release(becoming_alive);

        self.clear_marks();
        self.reconcile_alive();

        self.generation += 1;
        self.phase = Phase::Idle;
        debug_assert_eq!(self.alive.len(), self.population);

        trace!(
            "Generation {}: {} births, {} deaths, population {}",
            self.generation, births, deaths, self.population
        );
        Transition {
            generation: self.generation,
            births,
            deaths,
            population: self.population,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn recycling(&self) -> Recycling {
        self.pool.recycling()
    }

    /// Released work buffers currently held for reuse
    pub fn pooled_buffers(&self) -> usize {
        self.pool.len()
    }

    pub fn is_alive(&self, index: usize) -> bool {
        self.cells.get(index).copied().unwrap_or(false)
    }

    /// Occupancy of every cell, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Indices of live cells, in no particular order.
    pub fn alive_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.alive.as_slice().iter().copied()
    }

    pub fn dying_cells(&self) -> &[usize] {
        &self.dying
    }

    pub fn becoming_alive_cells(&self) -> &[usize] {
        &self.becoming_alive
    }

    fn cell_index(&self, index: i64) -> LifeResult<usize> {
        let area = self.area();
        match usize::try_from(index) {
            Ok(cell) if cell < area => Ok(cell),
            _ => Err(LifeError::OutOfBounds { index, area }),
        }
    }

    fn discard_analysis(&mut self) {
        let dying = mem::take(&mut self.dying);
        self.pool.release(dying);
        let becoming_alive = mem::take(&mut self.becoming_alive);
        self.pool.release(becoming_alive);
        self.clear_marks();
        self.phase = Phase::Idle;
    }

    fn clear_marks(&mut self) {
        for &cell in &self.marked {
            self.analyzed[cell] = false;
        }
        self.marked.clear();
    }

    /// Drops alive entries whose cell is dead: this generation's deaths plus
    /// anything left stale by out-of-band kills.
    fn reconcile_alive(&mut self) {
        let cells = &self.cells;
        self.alive.retain(|cell| cells[cell]);
    }
}
