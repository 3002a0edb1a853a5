//! Every noise function, addressable by name.
//!
//! Names match the free functions: `perlin3`, `open_simplex2`,
//! `cell4_manhattan_range_inv` and so on. A [`Noise`] looked up here samples
//! through a coordinate slice, checking the count once and then dispatching
//! straight to the typed function.

use std::{fmt, str::FromStr};

use crate::{
    cell::{
        self, Metric,
        Metric::{Euclidean, Manhattan},
        Selector,
        Selector::{Range, RangeInv, Value},
    },
    error::{Error, Result},
    open_simplex, perlin,
    seed::Seed,
};

/// The algorithm behind a registered noise function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Classic gradient noise.
    Perlin,
    /// Simplex-grid gradient noise.
    OpenSimplex,
    /// Cellular noise with a distance metric and result selector.
    Cell(Metric, Selector),
}

/// A registered noise function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Noise {
    /// Registry key, identical to the function name.
    key: &'static str,
    /// Algorithm and its parameters.
    family: Family,
    /// Number of coordinates taken.
    dimension: usize,
}

impl Noise {
    /// Registry entry constructor.
    const fn new(key: &'static str, family: Family, dimension: usize) -> Self {
        Self {
            key,
            family,
            dimension,
        }
    }

    /// The registry key.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// The algorithm and its parameters.
    pub fn family(&self) -> Family {
        self.family
    }

    /// Number of coordinates a sample takes.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Closed bounds that every finite sample lies within.
    ///
    /// Distances are bounded by the extent of the scanned neighbourhood: a
    /// point is less than one unit from its own cell's feature on each axis,
    /// and less than two from any feature in the neighbourhood.
    pub fn bounds(&self) -> (f64, f64) {
        let n = self.dimension as f64;
        match self.family {
            Family::Perlin | Family::OpenSimplex | Family::Cell(_, Selector::Value) => (-1.0, 1.0),
            Family::Cell(Metric::Euclidean, Selector::Range) => (0.0, n.sqrt()),
            Family::Cell(Metric::Manhattan, Selector::Range) => (0.0, n),
            Family::Cell(Metric::Euclidean, Selector::RangeInv) => (0.0, 2.0 * n.sqrt()),
            Family::Cell(Metric::Manhattan, Selector::RangeInv) => (0.0, 2.0 * n),
        }
    }

    /// A short human-readable description.
    pub fn description(&self) -> String {
        match self.family {
            Family::Perlin => format!("Perlin {}D", self.dimension),
            Family::OpenSimplex => format!("OpenSimplex {}D", self.dimension),
            Family::Cell(metric, selector) => {
                format!("Cell {}D ({metric}, {selector})", self.dimension)
            }
        }
    }

    /// Sample at `coords`, which must hold exactly [`Self::dimension`] values.
    pub fn sample(&self, seed: &Seed, coords: &[f64]) -> Result<f64> {
        let mismatch = || Error::Dimension {
            name: self.key,
            expected: self.dimension,
            got: coords.len(),
        };
        if coords.len() != self.dimension {
            return Err(mismatch());
        }

        Ok(match (self.family, coords) {
            (Family::Perlin, &[x, y]) => perlin::perlin2(seed, &[x, y]),
            (Family::Perlin, &[x, y, z]) => perlin::perlin3(seed, &[x, y, z]),
            (Family::Perlin, &[x, y, z, w]) => perlin::perlin4(seed, &[x, y, z, w]),
            (Family::OpenSimplex, &[x, y]) => open_simplex::open_simplex2(seed, &[x, y]),
            (Family::OpenSimplex, &[x, y, z]) => open_simplex::open_simplex3(seed, &[x, y, z]),
            (Family::Cell(m, s), &[x, y]) => cell::cell_noise(seed, &[x, y], m, s),
            (Family::Cell(m, s), &[x, y, z]) => cell::cell_noise(seed, &[x, y, z], m, s),
            (Family::Cell(m, s), &[x, y, z, w]) => cell::cell_noise(seed, &[x, y, z, w], m, s),
            _ => return Err(mismatch()),
        })
    }
}

impl fmt::Display for Noise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)
    }
}

impl FromStr for Noise {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        REGISTRY
            .iter()
            .find(|noise| noise.key == name)
            .copied()
            .ok_or_else(|| Error::UnknownNoise(name.to_string()))
    }
}

/// Shorthand for the cellular entries.
const fn cell(key: &'static str, dimension: usize, metric: Metric, selector: Selector) -> Noise {
    Noise::new(key, Family::Cell(metric, selector), dimension)
}

/// All registered noise functions.
pub const REGISTRY: [Noise; 23] = [
    Noise::new("perlin2", Family::Perlin, 2),
    Noise::new("perlin3", Family::Perlin, 3),
    Noise::new("perlin4", Family::Perlin, 4),
    Noise::new("open_simplex2", Family::OpenSimplex, 2),
    Noise::new("open_simplex3", Family::OpenSimplex, 3),
    cell("cell2_value", 2, Euclidean, Value),
    cell("cell3_value", 3, Euclidean, Value),
    cell("cell4_value", 4, Euclidean, Value),
    cell("cell2_range", 2, Euclidean, Range),
    cell("cell3_range", 3, Euclidean, Range),
    cell("cell4_range", 4, Euclidean, Range),
    cell("cell2_range_inv", 2, Euclidean, RangeInv),
    cell("cell3_range_inv", 3, Euclidean, RangeInv),
    cell("cell4_range_inv", 4, Euclidean, RangeInv),
    cell("cell2_manhattan_value", 2, Manhattan, Value),
    cell("cell3_manhattan_value", 3, Manhattan, Value),
    cell("cell4_manhattan_value", 4, Manhattan, Value),
    cell("cell2_manhattan_range", 2, Manhattan, Range),
    cell("cell3_manhattan_range", 3, Manhattan, Range),
    cell("cell4_manhattan_range", 4, Manhattan, Range),
    cell("cell2_manhattan_range_inv", 2, Manhattan, RangeInv),
    cell("cell3_manhattan_range_inv", 3, Manhattan, RangeInv),
    cell("cell4_manhattan_range_inv", 4, Manhattan, RangeInv),
];

/// Registry keys, in registry order.
pub const NOISE_NAMES: [&str; REGISTRY.len()] = {
    let mut names = [""; REGISTRY.len()];
    let mut i = 0;
    while i < REGISTRY.len() {
        names[i] = REGISTRY[i].key;
        i += 1;
    }
    names
};

/// Look up a noise function by name.
pub fn construct(name: &str) -> Result<Noise> {
    name.parse()
}
