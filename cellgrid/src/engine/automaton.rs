//! Conway's Game of Life with gratuitous bit noise.  Every tick the classic rule is applied to each cell using its
//! Moore neighborhood, after which each cell independently has a tiny chance of flipping state.
//!
//! The engine keeps two grids.  A tick reads only from the front grid and writes every cell of the back grid, then the
//! two are swapped, so no cell is ever read after it has been overwritten in the same tick and no allocation happens
//! after construction.

use std::mem;

use log::{debug, trace};
use rand::Rng;

use super::Engine;
use crate::conf::{AutomatonConf, DEFAULT_MUTATION_PROBABILITY};
use crate::error::{Error, Result};
use crate::generator::{seed, Generator, RandomFill};
use crate::grid::Grid;
use crate::render::{rasterize_life, Rasterize};
use crate::rng::{sim_rng, SimRng};
use crate::util::{get_coords, moore_neighbors};

/// Counts the live cells among the up to 8 cells touching `(x, y)`.  Neighbors that would fall outside of the grid are
/// skipped; the grid does not wrap around.
pub fn neighbor_count(grid: &Grid<bool>, x: usize, y: usize) -> u8 {
    moore_neighbors(x, y, grid.width(), grid.height())
        .filter(|&(nx, ny)| grid.get(nx, ny) == Some(true))
        .count() as u8
}

/// The Game of Life rule.  Arms are evaluated in order, so survival is checked before over-population and birth.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        // under-population
        (_, n) if n < 2 => false,
        // survival
        (true, 2) | (true, 3) => true,
        // over-population
        (_, n) if n > 3 => false,
        // reproduction
        (false, 3) => true,
        // a dead cell with exactly two neighbors stays dead
        _ => false,
    }
}

/// Random bit-flip stage run on every cell after the rule has been applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mutation {
    probability: f64,
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation {
            probability: DEFAULT_MUTATION_PROBABILITY,
        }
    }
}

impl Mutation {
    /// Flips each cell with independent probability `probability`, which has to lie within `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidProbability(probability));
        }

        Ok(Mutation { probability })
    }

    pub fn disabled() -> Self {
        Mutation { probability: 0.0 }
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn is_enabled(&self) -> bool {
        self.probability > 0.0
    }

    /// Returns `state`, flipped with the configured probability.  A disabled stage never touches the RNG.
    pub fn apply<R: Rng + ?Sized>(&self, state: bool, rng: &mut R) -> bool {
        if self.is_enabled() && rng.gen_bool(self.probability) {
            !state
        } else {
            state
        }
    }
}

/// Computes the generation following `current` into `next`, overwriting every one of its cells.
///
/// Panics if the two grids don't have the same dimensions.
pub fn transition<R: Rng + ?Sized>(current: &Grid<bool>, next: &mut Grid<bool>, mutation: &Mutation, rng: &mut R) {
    assert!(current.same_shape(next), "transition between grids of different dimensions");

    let width = current.width();
    for (i, (&alive, cell)) in current.cells().iter().zip(next.cells_mut().iter_mut()).enumerate() {
        let (x, y) = get_coords(i, width);
        let state = next_state(alive, neighbor_count(current, x, y));
        *cell = mutation.apply(state, rng);
    }
}

pub struct AutomatonEngine<R: Rng = SimRng> {
    front: Grid<bool>,
    back: Grid<bool>,
    mutation: Mutation,
    rng: R,
    generation: u64,
}

impl AutomatonEngine<SimRng> {
    /// Creates a `width` x `height` world seeded with at least `target_live_count` live cells, using an entropy-seeded
    /// RNG and the default mutation rate.
    pub fn new(width: u32, height: u32, target_live_count: usize) -> Result<Self> {
        let mut grid = Grid::new(width, height)?;
        let mut rng = sim_rng(None);
        RandomFill::new(target_live_count).gen(&mut grid, &mut rng)?;

        Ok(AutomatonEngine::with_rng(grid, Mutation::default(), rng))
    }

    pub fn from_conf(conf: &AutomatonConf) -> Result<Self> {
        conf.validate()?;

        let mut grid = Grid::new(conf.grid.width, conf.grid.height)?;
        let mut rng = sim_rng(conf.seed);
        seed(&mut grid, conf.target_live_count(), &mut rng)?;

        Ok(AutomatonEngine::with_rng(grid, conf.mutation.to_mutation()?, rng))
    }
}

impl<R: Rng> AutomatonEngine<R> {
    /// Wraps an already populated grid.  All randomness used by future ticks is drawn from `rng`.
    pub fn with_rng(grid: Grid<bool>, mutation: Mutation, rng: R) -> Self {
        debug!(
            "Created {}x{} automaton with {} live cells, mutation probability {}",
            grid.width(),
            grid.height(),
            grid.count(|&alive| alive),
            mutation.probability()
        );

        AutomatonEngine {
            back: grid.clone(),
            front: grid,
            mutation,
            rng,
            generation: 0,
        }
    }

    pub fn mutation(&self) -> Mutation {
        self.mutation
    }

    pub fn set_mutation(&mut self, mutation: Mutation) {
        self.mutation = mutation;
    }

    pub fn live_count(&self) -> usize {
        self.front.count(|&alive| alive)
    }

    pub fn into_grid(self) -> Grid<bool> {
        self.front
    }
}

impl<R: Rng> Engine for AutomatonEngine<R> {
    type Cell = bool;

    fn tick(&mut self) {
        transition(&self.front, &mut self.back, &self.mutation, &mut self.rng);
        mem::swap(&mut self.front, &mut self.back);
        self.generation += 1;
        trace!("Automaton generation {}", self.generation);
    }

    fn grid(&self) -> &Grid<bool> {
        &self.front
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl<R: Rng> Rasterize for AutomatonEngine<R> {
    fn rasterize(&self, buffer: &mut [u8]) -> Result<()> {
        rasterize_life(&self.front, buffer)
    }
}
