//! Criterion benchmarks for ticking and rasterizing both engines.
//!
//! Run with:
//! ```bash
//! cargo bench -p cellgrid
//! ```

use cellgrid::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

const WIDTH: u32 = 850;
const HEIGHT: u32 = 550;

fn automaton(c: &mut Criterion) {
    let conf = AutomatonConf {
        grid: GridConf::new(WIDTH, HEIGHT),
        seed: Some(42),
        ..Default::default()
    };
    let mut engine = AutomatonEngine::from_conf(&conf).unwrap();
    c.bench_function("automaton_tick", |b| b.iter(|| engine.tick()));

    let mut buffer = vec![0u8; (WIDTH * HEIGHT * 4) as usize];
    c.bench_function("automaton_rasterize", |b| b.iter(|| engine.rasterize(&mut buffer).unwrap()));

    c.bench_function("automaton_seed", |b| {
        b.iter_batched(
            || Grid::<bool>::new(WIDTH, HEIGHT).unwrap(),
            |mut grid| {
                RandomFill::new(conf.target_live_count())
                    .gen(&mut grid, &mut sim_rng(Some(7)))
                    .unwrap()
            },
            BatchSize::LargeInput,
        )
    });
}

fn fractal(c: &mut Criterion) {
    let mut engine = FractalEngine::new(640, 480).unwrap();
    c.bench_function("fractal_tick", |b| b.iter(|| engine.tick()));

    let mut buffer = vec![0u8; 640 * 480 * 4];
    c.bench_function("fractal_rasterize", |b| b.iter(|| engine.rasterize(&mut buffer).unwrap()));
}

criterion_group!(benches, automaton, fractal);
criterion_main!(benches);
