//! Configuration for the grid and both engines.
//!
//! Every struct deserializes with `#[serde(default)]`, so a config file only needs to name the options it changes.
//! Values are checked by `validate()` before an engine is built; out-of-range values are reported, never clamped.

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::engine::automaton::Mutation;
use crate::error::{Error, Result};

/// Probability of a cell flipping state after the rule has been applied: one in 999999.
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 1.0 / 999_999.0;
pub const DEFAULT_MAX_ITERATION: u8 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConf {
    pub width: u32,
    pub height: u32,
}

impl Default for GridConf {
    fn default() -> Self {
        GridConf {
            width: 850,
            height: 550,
        }
    }
}

impl GridConf {
    pub fn new(width: u32, height: u32) -> Self {
        GridConf { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

/// Settings of the random bit-flip stage applied after the Game of Life rule.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConf {
    pub enabled: bool,
    pub probability: f64,
}

impl Default for MutationConf {
    fn default() -> Self {
        MutationConf {
            enabled: true,
            probability: DEFAULT_MUTATION_PROBABILITY,
        }
    }
}

impl MutationConf {
    pub fn to_mutation(&self) -> Result<Mutation> {
        if self.enabled {
            Mutation::new(self.probability)
        } else {
            Ok(Mutation::disabled())
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConf {
    pub grid: GridConf,
    /// Share of the grid, in percent, that is alive after seeding.
    pub initial_live_cell_percentage: u8,
    pub mutation: MutationConf,
    /// Fixed RNG seed for reproducible runs; OS entropy is used when absent.
    pub seed: Option<u64>,
}

impl Default for AutomatonConf {
    fn default() -> Self {
        AutomatonConf {
            grid: GridConf::default(),
            initial_live_cell_percentage: 50,
            mutation: MutationConf::default(),
            seed: None,
        }
    }
}

impl AutomatonConf {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        if self.initial_live_cell_percentage > 100 {
            return Err(Error::InvalidPercentage(self.initial_live_cell_percentage));
        }
        self.mutation.to_mutation()?;

        Ok(())
    }

    /// Number of cells the initializer has to bring to life.
    pub fn target_live_count(&self) -> usize {
        self.grid.cell_count() * self.initial_live_cell_percentage as usize / 100
    }
}

/// The window of the complex plane that is mapped onto the grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexBounds {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl Default for ComplexBounds {
    fn default() -> Self {
        ComplexBounds {
            real_min: -2.0,
            real_max: 1.0,
            imag_min: -1.0,
            imag_max: 1.0,
        }
    }
}

impl ComplexBounds {
    pub fn validate(&self) -> Result<()> {
        check_axis("real", self.real_min, self.real_max)?;
        check_axis("imaginary", self.imag_min, self.imag_max)
    }
}

fn check_axis(axis: &'static str, min: f64, max: f64) -> Result<()> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(Error::InvalidBounds { axis, min, max });
    }

    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConf {
    pub grid: GridConf,
    pub max_iteration: u8,
    pub bounds: ComplexBounds,
}

impl Default for FractalConf {
    fn default() -> Self {
        FractalConf {
            grid: GridConf::new(640, 480),
            max_iteration: DEFAULT_MAX_ITERATION,
            bounds: ComplexBounds::default(),
        }
    }
}

impl FractalConf {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        if self.max_iteration == 0 {
            return Err(Error::InvalidIterationLimit);
        }

        self.bounds.validate()
    }
}

/// Parses a config from a JSON string.  Missing fields take their default values.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON config file.
pub fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    debug!("Loading config from {}", path.display());
    let contents = fs::read_to_string(path)?;
    from_json_str(&contents)
}
