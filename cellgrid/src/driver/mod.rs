//! Executes the simulation, driving progress forward by repeatedly calling the engine's `tick()` function.
//! Allows for things like rendering, logging, etc. to be implemented between ticks.

use log::info;

use crate::engine::Engine;

pub mod middleware;
use self::middleware::Middleware;

pub trait Driver<N: Engine> {
    /// Takes ownership of the engine, runs it and hands it back once the driver is done with it.
    fn run(self, engine: N, middleware: &mut [Box<dyn Middleware<N>>]) -> N;
}

/// Simplest implementation of a `Driver`.  Steps the engine a fixed number of times with no delay in between.
pub struct BasicDriver {
    pub ticks: u64,
}

impl BasicDriver {
    pub fn new(ticks: u64) -> Self {
        BasicDriver { ticks }
    }
}

impl<N: Engine> Driver<N> for BasicDriver {
    fn run(self, mut engine: N, middleware: &mut [Box<dyn Middleware<N>>]) -> N {
        info!("Starting simulation driver for {} ticks...", self.ticks);
        for _ in 0..self.ticks {
            for m in middleware.iter_mut() {
                m.before_tick(&mut engine);
            }

            engine.tick();

            for m in middleware.iter_mut() {
                m.after_tick(&mut engine);
            }
        }

        engine
    }
}
