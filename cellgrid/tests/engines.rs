//! End-to-end checks of both engines through the public API, the way a host drives them: build, tick, rasterize.

use cellgrid::conf::{self, GridConf};
use cellgrid::engine::automaton::neighbor_count;
use cellgrid::engine::fractal::escape_time;
use cellgrid::prelude::*;
use num::Complex;

fn alpha_at(buffer: &[u8], index: usize) -> u8 {
    buffer[index * 4 + 3]
}

#[test]
fn automaton_alpha_rises_while_alive_and_falls_while_dead() {
    // a block in the top-left corner is stable; a lone cell in the other corner dies on the first tick
    let mut grid = Grid::new(6, 6).unwrap();
    for &(x, y) in &[(0, 0), (1, 0), (0, 1), (1, 1), (5, 5)] {
        grid.set(x, y, true);
    }
    let mut engine = AutomatonEngine::with_rng(grid, Mutation::disabled(), sim_rng(Some(5)));
    let mut buffer = vec![0u8; 6 * 6 * 4];

    // prime the lone cell's alpha while it is still alive
    for _ in 0..3 {
        engine.rasterize(&mut buffer).unwrap();
    }
    let block_start = alpha_at(&buffer, 0);
    let lone_start = alpha_at(&buffer, 35);
    assert_eq!(lone_start, 7);

    engine.tick();
    engine.rasterize(&mut buffer).unwrap();
    let block_mid = alpha_at(&buffer, 0);
    let lone_mid = alpha_at(&buffer, 35);

    engine.tick();
    engine.rasterize(&mut buffer).unwrap();
    let block_end = alpha_at(&buffer, 0);
    let lone_end = alpha_at(&buffer, 35);

    assert!(block_start < block_mid && block_mid < block_end);
    assert!(lone_start > lone_mid && lone_mid > lone_end);
    assert_eq!(&buffer[0..3], &[255, 255, 255]);
    assert_eq!(&buffer[35 * 4..35 * 4 + 3], &[0, 0, 0]);
}

#[test]
fn fractal_fills_whole_buffer() {
    let engine = FractalEngine::new(40, 30).unwrap();
    let mut buffer = vec![0x5au8; 40 * 30 * 4];
    engine.rasterize(&mut buffer).unwrap();

    assert!(buffer.chunks(4).all(|px| px[3] == 255 && px[0] == px[1] && px[1] == px[2]));
    // points inside the set are shaded with the darkest palette entry
    let inside = 255 - engine.palette()[engine.max_iteration()];
    let center = engine.grid().index_of(26, 15).unwrap();
    assert_eq!(buffer[center * 4], inside);
}

#[test]
fn wrong_buffer_sizes_are_refused() {
    let life = AutomatonEngine::new(8, 8, 10).unwrap();
    let fractal = FractalEngine::new(8, 8).unwrap();

    for len in [0, 255, 257, 1024] {
        let mut buffer = vec![9u8; len];
        assert!(matches!(
            life.rasterize(&mut buffer),
            Err(Error::BufferSizeMismatch { expected: 256, .. })
        ));
        assert!(matches!(
            fractal.rasterize(&mut buffer),
            Err(Error::BufferSizeMismatch { expected: 256, .. })
        ));
        assert!(buffer.iter().all(|&b| b == 9));
    }
}

#[test]
fn automaton_from_json_config() {
    let conf: AutomatonConf = conf::from_json_str(
        r#"{
            "grid": { "width": 12, "height": 10 },
            "initial_live_cell_percentage": 100,
            "mutation": { "enabled": false },
            "seed": 99
        }"#,
    )
    .unwrap();
    let mut engine = AutomatonEngine::from_conf(&conf).unwrap();
    assert_eq!(engine.live_count(), 120);

    // a saturated grid keeps only its four corners, each of which has exactly three neighbors
    engine.tick();
    let grid = engine.grid();
    assert_eq!(engine.live_count(), 4);
    for &(x, y) in &[(0, 0), (11, 0), (0, 9), (11, 9)] {
        assert_eq!(grid.get(x, y), Some(true));
    }
    assert_eq!(neighbor_count(grid, 0, 0), 0);
}

#[test]
fn percentage_over_hundred_prevents_construction() {
    let conf = AutomatonConf {
        grid: GridConf::new(4, 4),
        initial_live_cell_percentage: 150,
        ..Default::default()
    };
    assert!(matches!(AutomatonEngine::from_conf(&conf), Err(Error::InvalidPercentage(150))));
}

#[test]
fn escape_time_extremes() {
    assert_eq!(escape_time(Complex::new(0.0, 0.0), 30), 30);
    assert!(escape_time(Complex::new(2.0, 2.0), 30) <= 1);
}

#[test]
fn driver_runs_automaton_with_renderer() {
    let conf = AutomatonConf {
        grid: GridConf::new(16, 16),
        initial_live_cell_percentage: 30,
        seed: Some(3),
        ..Default::default()
    };
    let engine = AutomatonEngine::from_conf(&conf).unwrap();
    let mut middleware: Vec<Box<dyn Middleware<AutomatonEngine>>> = vec![
        Box::new(TickLogger::new(5)),
        Box::new(CanvasRenderer::new(|pixels: &[u8]| assert_eq!(pixels.len(), 16 * 16 * 4))),
    ];

    let engine = BasicDriver::new(10).run(engine, &mut middleware);
    assert_eq!(engine.generation(), 10);
}
