//! Populates a grid with its initial collection of cells

use log::debug;
use rand::Rng;

use crate::cell::CellState;
use crate::error::{Error, Result};
use crate::grid::Grid;

pub trait Generator<C: CellState> {
    fn gen<R: Rng + ?Sized>(&mut self, grid: &mut Grid<C>, rng: &mut R) -> Result<()>;
}

/// Marks uniformly random cells live until at least `target_live` cells of the grid are alive.
#[derive(Clone, Copy, Debug)]
pub struct RandomFill {
    pub target_live: usize,
}

impl RandomFill {
    pub fn new(target_live: usize) -> Self {
        RandomFill { target_live }
    }
}

impl Generator<bool> for RandomFill {
    fn gen<R: Rng + ?Sized>(&mut self, grid: &mut Grid<bool>, rng: &mut R) -> Result<()> {
        seed(grid, self.target_live, rng)
    }
}

/// Picks random coordinates in batches, one pick per cell still missing, and marks them live.  Picks can land on cells
/// that are already alive, so the whole grid is re-counted after every batch and the loop only stops once the count has
/// reached `target_live`.  Asking for every cell of the grid is allowed and terminates once the grid is saturated.
pub fn seed<R: Rng + ?Sized>(grid: &mut Grid<bool>, target_live: usize, rng: &mut R) -> Result<()> {
    if target_live > grid.len() {
        return Err(Error::InvalidLiveCount {
            requested: target_live,
            capacity: grid.len(),
        });
    }

    let (width, height) = (grid.width(), grid.height());
    let mut live = grid.count(|&alive| alive);
    let mut batches = 0usize;
    while live < target_live {
        for _ in 0..(target_live - live) {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            grid.set(x, y, true);
        }

        live = grid.count(|&alive| alive);
        batches += 1;
    }

    debug!(
        "Seeded {}x{} grid with {} live cells (target {}) in {} batches",
        width, height, live, target_live, batches
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::sim_rng;

    #[test]
    fn zero_target_leaves_grid_dead() {
        let mut grid: Grid<bool> = Grid::new(8, 6).unwrap();
        seed(&mut grid, 0, &mut sim_rng(Some(1))).unwrap();
        assert_eq!(grid.count(|&alive| alive), 0);
    }

    #[test]
    fn full_target_saturates_grid() {
        let mut grid: Grid<bool> = Grid::new(9, 7).unwrap();
        seed(&mut grid, 63, &mut sim_rng(Some(2))).unwrap();
        assert!(grid.cells().iter().all(|&alive| alive));
    }

    #[test]
    fn partial_target_is_met() {
        let mut grid: Grid<bool> = Grid::new(20, 20).unwrap();
        seed(&mut grid, 150, &mut sim_rng(Some(3))).unwrap();
        assert!(grid.count(|&alive| alive) >= 150);
    }

    #[test]
    fn existing_live_cells_count_toward_target() {
        let mut grid: Grid<bool> = Grid::new(4, 4).unwrap();
        grid.fill(true);
        // already satisfied, so the generator must not draw at all
        let mut rng = sim_rng(Some(4));
        let mut untouched = sim_rng(Some(4));
        seed(&mut grid, 10, &mut rng).unwrap();
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn oversized_target_is_rejected() {
        let mut grid: Grid<bool> = Grid::new(3, 3).unwrap();
        let err = RandomFill::new(10).gen(&mut grid, &mut sim_rng(Some(5))).unwrap_err();
        assert!(matches!(err, Error::InvalidLiveCount { requested: 10, capacity: 9 }));
    }
}
