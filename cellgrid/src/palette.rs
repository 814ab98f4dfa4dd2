//! Precomputed intensity ramp used to shade escape-time iteration counts.

use std::ops::Index;

use log::debug;

/// Maps an iteration count in `0..=max_iteration` to a display intensity.  Entry `i` is `sqrt(i / len) * 255`, which
/// gives a ramp starting at 0 that rises quickly for low counts and flattens out towards the cap.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    ramp: Vec<u8>,
}

impl Palette {
    pub fn new(max_iteration: u8) -> Self {
        let len = max_iteration as usize + 1;
        let ramp: Vec<u8> = (0..len)
            .map(|i| ((i as f64 / len as f64).sqrt() * 255.0) as u8)
            .collect();
        debug!("Built palette of {} entries: {:?}", ramp.len(), ramp);

        Palette { ramp }
    }

    pub fn len(&self) -> usize {
        self.ramp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ramp.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.ramp
    }
}

/// Panics for counts past `max_iteration`; an evaluator never produces one.
impl Index<u8> for Palette {
    type Output = u8;

    fn index(&self, iterations: u8) -> &u8 {
        &self.ramp[iterations as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_shape() {
        for max_iteration in [1u8, 30, 100, 255] {
            let palette = Palette::new(max_iteration);
            assert_eq!(palette.len(), max_iteration as usize + 1);
            assert_eq!(palette[0], 0);
            assert!(palette.as_slice().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn default_ramp_values() {
        let palette = Palette::new(30);
        // sqrt(1/31) * 255 = 45.8, sqrt(30/31) * 255 = 250.8
        assert_eq!(palette[1], 45);
        assert_eq!(palette[30], 250);
    }

    #[test]
    #[should_panic]
    fn counts_past_cap_have_no_entry() {
        let palette = Palette::new(10);
        let _ = palette[11];
    }
}
