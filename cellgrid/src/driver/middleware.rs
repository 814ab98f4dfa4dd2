//! Declares additions that can be added onto the driver either before or after a tick completes.  Enables things like
//! rendering, progress logging, etc.

use std::io::{self, Stdout, Write};
use std::time::Instant;

use log::{error, info, trace};

use crate::engine::Engine;
use crate::render::buffer_len;

/// Adds some side effect on to the end or beginning of the tick cycle
pub trait Middleware<N: Engine> {
    fn before_tick(&mut self, _: &mut N) {}

    fn after_tick(&mut self, _: &mut N) {}
}

/// Logs every tick at `trace` level and the achieved ticks per second at `info` level once every `every` ticks.
pub struct TickLogger {
    every: u64,
    last_report: Instant,
    ticks_since_report: u64,
    reports: u64,
}

impl TickLogger {
    pub fn new(every: u64) -> Self {
        TickLogger {
            every: every.max(1),
            last_report: Instant::now(),
            ticks_since_report: 0,
            reports: 0,
        }
    }

    /// Number of summaries logged so far.
    pub fn reports(&self) -> u64 {
        self.reports
    }
}

impl<N: Engine> Middleware<N> for TickLogger {
    fn after_tick(&mut self, engine: &mut N) {
        self.ticks_since_report += 1;
        trace!("Completed tick {}", engine.generation());
        if self.ticks_since_report < self.every {
            return;
        }

        let elapsed = self.last_report.elapsed().as_secs_f64();
        let tps = self.ticks_since_report as f64 / elapsed.max(f64::EPSILON);
        info!(
            "Generation {}: {} ticks in {:.3}s ({:.2} TPS)",
            engine.generation(),
            self.ticks_since_report,
            elapsed,
            tps
        );

        self.last_report = Instant::now();
        self.ticks_since_report = 0;
        self.reports += 1;
    }
}

/// Middleware that rasterizes the engine into an internal RGBA buffer after every tick and then calls the provided
/// `canvas_render` function with that buffer.  The buffer is kept between ticks, which the fading trails of the
/// automaton rely on, and is resized if it doesn't match the engine's grid.
pub struct CanvasRenderer<F: FnMut(&[u8])> {
    pixbuf: Vec<u8>,
    canvas_render: F,
}

impl<F: FnMut(&[u8])> CanvasRenderer<F> {
    pub fn new(canvas_render: F) -> Self {
        CanvasRenderer {
            pixbuf: Vec::new(),
            canvas_render,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixbuf
    }
}

impl<N: Engine, F: FnMut(&[u8])> Middleware<N> for CanvasRenderer<F> {
    fn after_tick(&mut self, engine: &mut N) {
        let expected_pixbuf_size = buffer_len(engine.grid().len());
        if self.pixbuf.len() != expected_pixbuf_size {
            self.pixbuf.resize(expected_pixbuf_size, 0);
        }

        match engine.rasterize(&mut self.pixbuf) {
            Ok(()) => (self.canvas_render)(&self.pixbuf),
            Err(err) => error!("Failed to rasterize generation {}: {}", engine.generation(), err),
        }
    }
}

/// Prints the grid of a Game of Life engine after every tick, stdout unless another writer is given.
pub struct GridPrinter<W: Write = Stdout> {
    out: W,
}

impl GridPrinter {
    pub fn new() -> Self {
        GridPrinter { out: io::stdout() }
    }
}

impl Default for GridPrinter {
    fn default() -> Self {
        GridPrinter::new()
    }
}

impl<W: Write> GridPrinter<W> {
    pub fn with_writer(out: W) -> Self {
        GridPrinter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<N: Engine<Cell = bool>, W: Write> Middleware<N> for GridPrinter<W> {
    fn after_tick(&mut self, engine: &mut N) {
        if let Err(err) = writeln!(self.out, "{}", engine.grid()) {
            error!("Failed to print generation {}: {}", engine.generation(), err);
        }
    }
}
