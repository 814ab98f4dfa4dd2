//! Declares the grid in which all cells of a simulation reside.  The grid is a rectangular two-dimensional array of
//! cells stored as a single flat buffer in row-major order, so the cell at `(x, y)` lives at index `y * width + x`.
//!
//! The dimensions of a grid are fixed for its whole lifetime; there is no way to resize one after construction.
//! Engines never mutate the grid they are reading from during a tick.  They either compute into a second grid and swap
//! the two or, for simulations that don't depend on prior state, overwrite the grid wholesale.

use std::fmt::{self, Display, Formatter};

use crate::cell::CellState;
use crate::error::{Error, Result};
use crate::util::{get_coords, get_index};

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<C: CellState> {
    width: usize,
    height: usize,
    cells: Vec<C>,
}

impl<C: CellState> Grid<C> {
    /// Allocates a grid with every cell set to `C::default()`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let (width, height) = (width as usize, height as usize);
        Ok(Grid {
            width,
            height,
            cells: vec![C::default(); width * height],
        })
    }

    /// Builds a grid from an existing row-major buffer of cells.
    pub fn from_cells(width: u32, height: u32, cells: Vec<C>) -> Result<Self> {
        let mut grid = Grid::new(width, height)?;
        if cells.len() != grid.cells.len() {
            return Err(Error::CellCountMismatch {
                expected: grid.cells.len(),
                actual: cells.len(),
            });
        }

        grid.cells = cells;
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, always `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if self.contains(x, y) {
            Some(get_index(x, y, self.width))
        } else {
            None
        }
    }

    pub fn coords_of(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.cells.len() {
            Some(get_coords(index, self.width))
        } else {
            None
        }
    }

    /// Returns the state of the cell at `(x, y)` or `None` if the coordinate lies outside of the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<C> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// Sets the state of the cell at `(x, y)`, returning `false` without touching anything if the coordinate lies
    /// outside of the grid.
    pub fn set(&mut self, x: usize, y: usize, state: C) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    /// Mutable view of the cell buffer.  The slice can't be grown or shrunk, so the length invariant holds.
    pub fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    pub fn fill(&mut self, state: C) {
        for cell in self.cells.iter_mut() {
            *cell = state;
        }
    }

    /// Counts the cells whose state matches the predicate.
    pub fn count<F: Fn(&C) -> bool>(&self, pred: F) -> usize {
        self.cells.iter().filter(|c| pred(c)).count()
    }

    pub fn same_shape<D: CellState>(&self, other: &Grid<D>) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// Renders one row per line with `#` for live cells and `.` for dead ones.
impl Display for Grid<bool> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &alive in row {
                write!(formatter, "{}", if alive { '#' } else { '.' })?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            Grid::<bool>::new(0, 5),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(matches!(
            Grid::<u8>::new(7, 0),
            Err(Error::InvalidDimension { width: 7, height: 0 })
        ));
    }

    #[test]
    fn new_grid_is_default_filled() {
        let grid: Grid<u8> = Grid::new(4, 3).unwrap();
        assert_eq!(grid.len(), 12);
        assert!(grid.cells().iter().all(|&c| c == 0));

        let grid: Grid<bool> = Grid::new(4, 3).unwrap();
        assert_eq!(grid.count(|&alive| alive), 0);
    }

    #[test]
    fn out_of_range_access_is_refused() {
        let mut grid: Grid<bool> = Grid::new(3, 2).unwrap();
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(!grid.set(5, 5, true));
        assert_eq!(grid.count(|&alive| alive), 0);

        assert!(grid.set(2, 1, true));
        assert_eq!(grid.get(2, 1), Some(true));
        assert!(grid.cells()[5]);
    }

    #[test]
    fn linear_index_mapping() {
        let grid: Grid<u8> = Grid::new(5, 4).unwrap();
        assert_eq!(grid.index_of(3, 2), Some(13));
        assert_eq!(grid.coords_of(13), Some((3, 2)));
        assert_eq!(grid.coords_of(20), None);
    }

    #[test]
    fn from_cells_checks_length() {
        let grid = Grid::from_cells(2, 2, vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(grid.get(1, 1), Some(4));

        assert!(matches!(
            Grid::from_cells(2, 2, vec![true; 3]),
            Err(Error::CellCountMismatch { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn display_draws_rows() {
        let grid = Grid::from_cells(3, 2, vec![true, false, false, false, true, true]).unwrap();
        assert_eq!(grid.to_string(), "#..\n.##\n");
    }
}
