//! Escape-time evaluation of the Mandelbrot set.  Each cell is mapped to a point `c` of the complex plane and holds
//! the number of iterations of `z = z^2 + c` it took for `z` to leave the circle of radius 2, capped at the
//! configured maximum.
//!
//! A cell's value depends only on its coordinate and the plane window, never on the previous state of the grid, so a
//! tick simply re-evaluates the whole grid in place.

use log::{debug, trace};
use num::Complex;

use super::Engine;
use crate::conf::{ComplexBounds, FractalConf, GridConf};
use crate::error::Result;
use crate::grid::Grid;
use crate::palette::Palette;
use crate::render::{rasterize_iterations, Rasterize};
use crate::util::get_coords;

/// Maps grid coordinate `(x, y)` onto the window of the complex plane described by `bounds`.  The left/top edge of the
/// grid lands exactly on the minimum of each axis.
pub fn pixel_to_complex(x: usize, y: usize, width: usize, height: usize, bounds: &ComplexBounds) -> Complex<f64> {
    let re = bounds.real_min + (x as f64 / width as f64) * (bounds.real_max - bounds.real_min);
    let im = bounds.imag_min + (y as f64 / height as f64) * (bounds.imag_max - bounds.imag_min);
    Complex::new(re, im)
}

/// Iterates `z = z^2 + c` starting from `z = 0` and returns how many iterations ran before `|z|^2` exceeded 4, or
/// `max_iteration` if it never did.
pub fn escape_time(c: Complex<f64>, max_iteration: u8) -> u8 {
    let mut z = Complex::new(0.0, 0.0);
    let mut n = 0;
    while z.norm_sqr() <= 4.0 && n < max_iteration {
        z = z * z + c;
        n += 1;
    }

    n
}

/// Fills every cell of `grid` with the escape time of its point on the plane.
pub fn evaluate(grid: &mut Grid<u8>, bounds: &ComplexBounds, max_iteration: u8) {
    let (width, height) = (grid.width(), grid.height());
    for (i, cell) in grid.cells_mut().iter_mut().enumerate() {
        let (x, y) = get_coords(i, width);
        *cell = escape_time(pixel_to_complex(x, y, width, height, bounds), max_iteration);
    }
}

pub struct FractalEngine {
    grid: Grid<u8>,
    palette: Palette,
    bounds: ComplexBounds,
    max_iteration: u8,
    generation: u64,
}

impl FractalEngine {
    /// Creates a `width` x `height` view of the default window (`-2..1` real, `-1..1` imaginary) evaluated with the
    /// default iteration cap.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        FractalEngine::from_conf(&FractalConf {
            grid: GridConf::new(width, height),
            ..Default::default()
        })
    }

    /// Builds the engine and evaluates the grid once, so it can be rendered before the first tick.
    pub fn from_conf(conf: &FractalConf) -> Result<Self> {
        conf.validate()?;

        let mut engine = FractalEngine {
            grid: Grid::new(conf.grid.width, conf.grid.height)?,
            palette: Palette::new(conf.max_iteration),
            bounds: conf.bounds,
            max_iteration: conf.max_iteration,
            generation: 0,
        };
        evaluate(&mut engine.grid, &engine.bounds, engine.max_iteration);
        debug!(
            "Created {}x{} fractal over re [{}, {}] im [{}, {}], max iteration {}",
            conf.grid.width,
            conf.grid.height,
            conf.bounds.real_min,
            conf.bounds.real_max,
            conf.bounds.imag_min,
            conf.bounds.imag_max,
            conf.max_iteration
        );

        Ok(engine)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn bounds(&self) -> &ComplexBounds {
        &self.bounds
    }

    pub fn max_iteration(&self) -> u8 {
        self.max_iteration
    }
}

impl Engine for FractalEngine {
    type Cell = u8;

    fn tick(&mut self) {
        evaluate(&mut self.grid, &self.bounds, self.max_iteration);
        self.generation += 1;
        trace!("Fractal frame {}", self.generation);
    }

    fn grid(&self) -> &Grid<u8> {
        &self.grid
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl Rasterize for FractalEngine {
    fn rasterize(&self, buffer: &mut [u8]) -> Result<()> {
        rasterize_iterations(&self.grid, &self.palette, buffer)
    }
}
