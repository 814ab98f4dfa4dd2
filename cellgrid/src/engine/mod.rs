//! This is the core of the simulation.  An engine owns the grid and drives the simulation forward one tick at a time
//! by deriving the next state of every cell from the current one.

use crate::cell::CellState;
use crate::grid::Grid;
use crate::render::Rasterize;

pub mod automaton;
pub mod fractal;

pub trait Engine: Rasterize {
    type Cell: CellState;

    /// The main function of the simulation process.  Advances every cell of the grid by exactly one generation.  This
    /// is called repeatedly by the host (or a `Driver`) to drive progress in the simulation.
    fn tick(&mut self);

    fn grid(&self) -> &Grid<Self::Cell>;

    /// Number of ticks completed since construction.
    fn generation(&self) -> u64;
}
