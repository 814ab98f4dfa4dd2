//! Declares the values that a single cell of a grid can hold.  Cells carry no coordinates of their own; their position
//! is implied by their offset in the grid's flat buffer.
//!
//! Every tick of a simulation, a function is evaluated that derives each cell's next state.  Its inputs are either the
//! cell and its bounded neighborhood or, for stateless simulations, nothing but the cell's coordinate.

use std::fmt::Debug;

/// A value that can be stored in a `Grid`.  Grids are allocated filled with `Default::default()`, so the default
/// value should be the "empty" state of the simulation (dead, zero iterations, ...).
pub trait CellState: Copy + Default + PartialEq + Debug {}

/// Liveness of a Game of Life cell.
impl CellState for bool {}

/// Escape-time iteration count of a fractal cell.
impl CellState for u8 {}
