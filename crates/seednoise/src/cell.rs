//! Cellular (Worley) noise in 2, 3 and 4 dimensions.
//!
//! Every integer cell holds one feature point at a hashed offset in `[0, 1)`
//! per axis, plus a hashed value in `[-1, 1]`. A query scans the `3^N` cells
//! around the point for the nearest (`F1`) and second-nearest (`F2`)
//! features under the chosen [`Metric`], and the [`Selector`] turns those into
//! the result.
//!
//! Any feature outside the scanned neighbourhood is more than one unit away
//! along some axis. Whenever `F1` (or `F2`) is at most 1 it is therefore
//! exact; larger distances are the best found in the neighbourhood.
//!
//! Distances are linear, never squared. Non-finite coordinates find no
//! feature, giving infinite distances and a NaN value.

use std::fmt;

use crate::{
    math,
    seed::{Seed, TABLE_SIZE},
};

/// Distance function used to rank feature points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Straight-line distance, the root of the summed squared differences.
    Euclidean,
    /// Sum of the absolute per-axis differences.
    Manhattan,
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    #[inline]
    pub fn distance<const N: usize>(self, a: &[f64; N], b: &[f64; N]) -> f64 {
        let diffs = a.iter().zip(b).map(|(x, y)| x - y);
        match self {
            Self::Euclidean => diffs.map(|d| d * d).sum::<f64>().sqrt(),
            Self::Manhattan => diffs.map(f64::abs).sum(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        })
    }
}

/// What a cellular query reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The hashed value of the nearest feature's cell, in `[-1, 1]`.
    Value,
    /// `F1`, the distance to the nearest feature.
    Range,
    /// `F2 - F1`, large inside cells and zero on their boundaries.
    RangeInv,
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::Range => "range",
            Self::RangeInv => "range_inv",
        })
    }
}

/// The nearest features found around a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    /// Distance to the nearest feature.
    pub f1: f64,
    /// Distance to the second-nearest feature; never less than `f1`.
    pub f2: f64,
    /// Hashed value of the nearest feature's cell.
    pub value: f64,
}

impl Features {
    /// Reduce to a single result.
    pub fn select(&self, selector: Selector) -> f64 {
        match selector {
            Selector::Value => self.value,
            Selector::Range => self.f1,
            Selector::RangeInv => self.f2 - self.f1,
        }
    }
}

/// In-cell offset and value of the feature point owned by `cell`.
///
/// The cell hash seeds a walk through the permutation: each step gives the
/// next axis offset (`h / 256`), and one more step gives the value.
fn jitter<const N: usize>(seed: &Seed, cell: &[i64; N]) -> ([f64; N], f64) {
    let mut h = seed.hash(cell);
    let mut offset = [0.0; N];
    for slot in &mut offset {
        h = seed.step(h);
        *slot = h as f64 / TABLE_SIZE as f64;
    }
    let value = seed.step(h) as f64 / 127.5 - 1.0;
    (offset, value)
}

/// Position and value of the feature point owned by `cell`.
pub fn feature_point<const N: usize>(seed: &Seed, cell: &[i64; N]) -> ([f64; N], f64) {
    let (offset, value) = jitter(seed, cell);
    let mut position = offset;
    for (axis, slot) in position.iter_mut().enumerate() {
        *slot += cell[axis] as f64;
    }
    (position, value)
}

/// Nearest and second-nearest features among the `3^N` cells around `point`.
///
/// Positions are placed relative to the floating-point floor of `point`; the
/// integer cell only feeds the hash. Far from the origin, where the integer
/// cell saturates or the float spacing exceeds one, every feature still
/// rounds to within two units of the point per axis.
pub fn features<const N: usize>(seed: &Seed, point: &[f64; N], metric: Metric) -> Features {
    let (cell, _) = math::split(point);
    let base = point.map(f64::floor);
    let mut found = Features {
        f1: f64::INFINITY,
        f2: f64::INFINITY,
        value: f64::NAN,
    };

    for index in 0..3usize.pow(N as u32) {
        let mut offset = [0; N];
        let mut rest = index;
        for slot in &mut offset {
            *slot = (rest % 3) as i64 - 1;
            rest /= 3;
        }

        let (shift, value) = jitter(seed, &math::offset_cell(&cell, &offset));
        let mut position = base;
        for axis in 0..N {
            position[axis] += offset[axis] as f64 + shift[axis];
        }
        let distance = metric.distance(point, &position);
        if distance < found.f1 {
            found.f2 = found.f1;
            found.f1 = distance;
            found.value = value;
        } else if distance < found.f2 {
            found.f2 = distance;
        }
    }
    found
}

/// Cellular noise at `point` for any metric and selector.
pub fn cell_noise<const N: usize>(
    seed: &Seed,
    point: &[f64; N],
    metric: Metric,
    selector: Selector,
) -> f64 {
    features(seed, point, metric).select(selector)
}

/// Stamp out one public function per dimension, metric and selector.
macro_rules! cell_fns {
    ($($name:ident: $dim:literal, $metric:ident, $selector:ident, $doc:literal;)*) => {
        $(
            #[doc = $doc]
            pub fn $name(seed: &Seed, point: &[f64; $dim]) -> f64 {
                cell_noise(seed, point, Metric::$metric, Selector::$selector)
            }
        )*
    };
}

cell_fns! {
    cell2_value: 2, Euclidean, Value, "2D cellular noise: value of the nearest feature's cell.";
    cell3_value: 3, Euclidean, Value, "3D cellular noise: value of the nearest feature's cell.";
    cell4_value: 4, Euclidean, Value, "4D cellular noise: value of the nearest feature's cell.";
    cell2_range: 2, Euclidean, Range,
        "2D cellular noise: Euclidean distance to the nearest feature.";
    cell3_range: 3, Euclidean, Range,
        "3D cellular noise: Euclidean distance to the nearest feature.";
    cell4_range: 4, Euclidean, Range,
        "4D cellular noise: Euclidean distance to the nearest feature.";
    cell2_range_inv: 2, Euclidean, RangeInv, "2D cellular noise: Euclidean `F2 - F1`.";
    cell3_range_inv: 3, Euclidean, RangeInv, "3D cellular noise: Euclidean `F2 - F1`.";
    cell4_range_inv: 4, Euclidean, RangeInv, "4D cellular noise: Euclidean `F2 - F1`.";
    cell2_manhattan_value: 2, Manhattan, Value,
        "2D cellular noise: value of the nearest feature's cell by Manhattan distance.";
    cell3_manhattan_value: 3, Manhattan, Value,
        "3D cellular noise: value of the nearest feature's cell by Manhattan distance.";
    cell4_manhattan_value: 4, Manhattan, Value,
        "4D cellular noise: value of the nearest feature's cell by Manhattan distance.";
    cell2_manhattan_range: 2, Manhattan, Range,
        "2D cellular noise: Manhattan distance to the nearest feature.";
    cell3_manhattan_range: 3, Manhattan, Range,
        "3D cellular noise: Manhattan distance to the nearest feature.";
    cell4_manhattan_range: 4, Manhattan, Range,
        "4D cellular noise: Manhattan distance to the nearest feature.";
    cell2_manhattan_range_inv: 2, Manhattan, RangeInv, "2D cellular noise: Manhattan `F2 - F1`.";
    cell3_manhattan_range_inv: 3, Manhattan, RangeInv, "3D cellular noise: Manhattan `F2 - F1`.";
    cell4_manhattan_range_inv: 4, Manhattan, RangeInv, "4D cellular noise: Manhattan `F2 - F1`.";
}
