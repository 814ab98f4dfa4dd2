//! Game of Life with rare random mutations, run headless.
//!
//! Usage: `life [config.json] [ticks]`
//!
//! Every tick the world is rasterized into an RGBA buffer the same way a windowed host would blit it; here the frame
//! is only summarized in the log.  Small worlds are printed to stdout once the run finishes.

use std::env;

use anyhow::Context;
use cellgrid::conf;
use cellgrid::prelude::*;
use log::{debug, info};

const DEFAULT_TICKS: u64 = 600;
const LOG_EVERY: u64 = 120;
const MAX_PRINT_WIDTH: usize = 160;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let conf: AutomatonConf = match args.next() {
        Some(path) => conf::load(&path).with_context(|| format!("failed to load config from {}", path))?,
        None => AutomatonConf::default(),
    };
    let ticks: u64 = match args.next() {
        Some(ticks) => ticks.parse().with_context(|| format!("invalid tick count: {}", ticks))?,
        None => DEFAULT_TICKS,
    };

    let engine = AutomatonEngine::from_conf(&conf).context("failed to create the automaton")?;
    info!(
        "Game of Life on a {}x{} world, {} live cells to start",
        conf.grid.width,
        conf.grid.height,
        engine.live_count()
    );

    let mut middleware: Vec<Box<dyn Middleware<AutomatonEngine>>> = vec![
        Box::new(TickLogger::new(LOG_EVERY)),
        Box::new(CanvasRenderer::new(|pixels: &[u8]| {
            let visible = pixels.chunks_exact(4).filter(|px| px[3] > 0).count();
            debug!("Frame ready, {} pixels visible", visible);
        })),
    ];
    let engine = BasicDriver::new(ticks).run(engine, &mut middleware);

    info!(
        "Finished after {} generations with {} live cells",
        engine.generation(),
        engine.live_count()
    );
    if engine.grid().width() <= MAX_PRINT_WIDTH {
        print!("{}", engine.grid());
    }

    Ok(())
}
