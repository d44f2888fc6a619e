use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Cell;
use crate::error::Error;

/// Named, deterministic starting configuration for a field.
/// Every preset is a pure function of (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Preset {
    /// Every cell dead
    Empty,
    /// Live 2x2 blocks separated by dead lines on every third column and row
    #[default]
    StableSquares,
}

impl Preset {
    /// Get all available presets
    pub fn all() -> Vec<Preset> {
        vec![Preset::Empty, Preset::StableSquares]
    }

    /// Identifier used in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Empty => "empty",
            Preset::StableSquares => "stable_squares",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Preset::Empty => "All cells dead",
            Preset::StableSquares => "Still life of 2x2 blocks on a 3-cell lattice",
        }
    }

    /// State of the cell at (col, row) under this preset
    pub const fn cell_at(self, col: usize, row: usize) -> Cell {
        match self {
            Preset::Empty => Cell::Dead,
            Preset::StableSquares => Cell::from_alive(col % 3 != 0 && row % 3 != 0),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPreset(s.to_owned()))
    }
}

impl TryFrom<String> for Preset {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Preset> for String {
    fn from(preset: Preset) -> Self {
        preset.name().to_owned()
    }
}
