//! Mandelbrot set evaluator, run headless.
//!
//! Usage: `mandelbrot [config.json] [ticks]`
//!
//! The window onto the complex plane is fixed, so every tick produces the same frame.  Frames are summarized in the
//! log; small grids are printed to stdout as ASCII shading once the run finishes.

use std::env;

use anyhow::Context;
use cellgrid::conf;
use cellgrid::prelude::*;
use log::{debug, info};

const DEFAULT_TICKS: u64 = 1;
const MAX_PRINT_WIDTH: usize = 160;
const SHADES: &[u8] = b" .:-=+*#%@";

fn shade(iterations: u8, max_iteration: u8) -> char {
    let step = iterations as usize * (SHADES.len() - 1) / max_iteration as usize;
    SHADES[step] as char
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let conf: FractalConf = match args.next() {
        Some(path) => conf::load(&path).with_context(|| format!("failed to load config from {}", path))?,
        None => FractalConf::default(),
    };
    let ticks: u64 = match args.next() {
        Some(ticks) => ticks.parse().with_context(|| format!("invalid tick count: {}", ticks))?,
        None => DEFAULT_TICKS,
    };

    let engine = FractalEngine::from_conf(&conf).context("failed to create the fractal evaluator")?;
    info!(
        "Mandelbrot set on a {}x{} grid, max iteration {}",
        conf.grid.width, conf.grid.height, conf.max_iteration
    );

    let mut middleware: Vec<Box<dyn Middleware<FractalEngine>>> = vec![
        Box::new(TickLogger::new(ticks.max(1))),
        Box::new(CanvasRenderer::new(|pixels: &[u8]| {
            let darkest = pixels.chunks_exact(4).map(|px| px[0]).min().unwrap_or(255);
            debug!("Frame ready, darkest shade {}", darkest);
        })),
    ];
    let engine = BasicDriver::new(ticks).run(engine, &mut middleware);

    let grid = engine.grid();
    let inside = grid.count(|&n| n == engine.max_iteration());
    info!("{} of {} points never escaped", inside, grid.len());

    if grid.width() <= MAX_PRINT_WIDTH {
        for row in grid.cells().chunks(grid.width()) {
            let line: String = row.iter().map(|&n| shade(n, engine.max_iteration())).collect();
            println!("{}", line);
        }
    }

    Ok(())
}
