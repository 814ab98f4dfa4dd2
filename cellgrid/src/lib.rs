//! Cellgrid Simulation Core
//!
//! A fixed-size 2D grid of cells, a per-cell function deriving each cell's next value, a double-buffered
//! tick and a mapping from cell values to RGBA pixels.  Two engines are built on top of it: a Game of
//! Life automaton with rare random bit-flips and an escape-time Mandelbrot evaluator.
//!
//! Windowing, input and frame pacing belong to the host; it drives the engines through the `driver`
//! module or by calling `tick()` and `rasterize()` itself.

pub mod cell;
pub mod conf;
pub mod driver;
pub mod engine;
pub mod error;
pub mod generator;
pub mod grid;
pub mod palette;
pub mod render;
pub mod rng;
pub mod util;

pub mod prelude {
    pub use crate::cell::CellState;
    pub use crate::conf::{AutomatonConf, ComplexBounds, FractalConf, GridConf, MutationConf};
    pub use crate::driver::middleware::{CanvasRenderer, GridPrinter, Middleware, TickLogger};
    pub use crate::driver::{BasicDriver, Driver};
    pub use crate::engine::automaton::{AutomatonEngine, Mutation};
    pub use crate::engine::fractal::FractalEngine;
    pub use crate::engine::Engine;
    pub use crate::error::{Error, Result};
    pub use crate::generator::{Generator, RandomFill};
    pub use crate::grid::Grid;
    pub use crate::palette::Palette;
    pub use crate::render::Rasterize;
    pub use crate::rng::{sim_rng, SimRng};
}
