//! Converts the state of a grid into RGBA pixel data, the same format accepted by HTML canvases and most blitting
//! APIs.  Each cell becomes exactly four bytes in row-major order.  The pixel buffer belongs to the caller; it is
//! only borrowed for the duration of a single call.

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::palette::Palette;

/// Anything that can paint its current state into a caller-owned RGBA buffer.
pub trait Rasterize {
    fn rasterize(&self, buffer: &mut [u8]) -> Result<()>;
}

/// Number of bytes of RGBA data needed to hold a grid of `cells` cells.
pub fn buffer_len(cells: usize) -> usize {
    cells * 4
}

/// Fails with `BufferSizeMismatch` unless `buffer` is exactly the right size for `cells` cells.  Called before any
/// byte is written.
pub fn check_buffer(buffer: &[u8], cells: usize) -> Result<()> {
    let expected = buffer_len(cells);
    if buffer.len() != expected {
        return Err(Error::BufferSizeMismatch {
            expected,
            actual: buffer.len(),
        });
    }

    Ok(())
}

/// Next alpha value of a Game of Life pixel.  Live cells fill in one bit at a time (`alpha * 2 + 1`, saturating at
/// 255) and dead cells fade out one bit at a time (`alpha >> 1`), which leaves fading trails behind moving patterns.
pub fn trail_alpha(alpha: u8, alive: bool) -> u8 {
    if alive {
        alpha.saturating_mul(2).saturating_add(1)
    } else {
        alpha >> 1
    }
}

/// Paints live cells white and dead cells black, accumulating alpha from whatever the buffer held before.
pub fn rasterize_life(grid: &Grid<bool>, buffer: &mut [u8]) -> Result<()> {
    check_buffer(buffer, grid.len())?;

    for (&alive, pixel) in grid.cells().iter().zip(buffer.chunks_exact_mut(4)) {
        let shade = if alive { 0xff } else { 0 };
        pixel[0] = shade;
        pixel[1] = shade;
        pixel[2] = shade;
        pixel[3] = trail_alpha(pixel[3], alive);
    }

    Ok(())
}

/// Paints each cell a fully opaque gray of `255 - palette[iterations]`, so points that never escape come out dark.
pub fn rasterize_iterations(grid: &Grid<u8>, palette: &Palette, buffer: &mut [u8]) -> Result<()> {
    check_buffer(buffer, grid.len())?;

    for (&iterations, pixel) in grid.cells().iter().zip(buffer.chunks_exact_mut(4)) {
        let shade = 255 - palette[iterations];
        pixel.copy_from_slice(&[shade, shade, shade, 0xff]);
    }

    Ok(())
}
