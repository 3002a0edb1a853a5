//! Simplex-grid noise in 2 and 3 dimensions.
//!
//! The input is skewed onto a lattice of unit hypercubes, each split into
//! `N!` simplices. Ranking the point's fractional offsets picks the simplex
//! that contains it and the order in which its `N + 1` corners are visited.
//! Each corner contributes `(0.5 - d²)^4 (g · d)` inside radius² 0.5, which is
//! the squared distance from a corner to the far face of any simplex that
//! contains it. A corner therefore fades out completely before the point can
//! leave its simplices.

use std::array;

use crate::{gradient, math, seed::Seed};

/// Squared radius of a corner's influence.
const RADIUS_SQ: f64 = 0.5;

/// Output scale for 2D: the reciprocal of the largest attainable corner sum
/// (about 0.010080), rounded down.
const NORM_2D: f64 = 99.0;

/// Output scale for 3D: the reciprocal of the largest attainable corner sum
/// (about 0.009289), rounded down.
const NORM_3D: f64 = 107.0;

/// 2D simplex-grid noise at `point`, in `[-1, 1]`.
pub fn open_simplex2(seed: &Seed, point: &[f64; 2]) -> f64 {
    open_simplex(seed, point, gradient::get2) * NORM_2D
}

/// 3D simplex-grid noise at `point`, in `[-1, 1]`.
pub fn open_simplex3(seed: &Seed, point: &[f64; 3]) -> f64 {
    open_simplex(seed, point, gradient::get3) * NORM_3D
}

/// Skew factor taking input space onto the hypercube lattice.
fn skew_factor(n: usize) -> f64 {
    let n = n as f64;
    ((n + 1.0).sqrt() - 1.0) / n
}

/// Unskew factor taking lattice coordinates back to input space.
fn unskew_factor(n: usize) -> f64 {
    let n = n as f64;
    (1.0 - 1.0 / (n + 1.0).sqrt()) / n
}

/// Unnormalised sum of the corner contributions.
fn open_simplex<const N: usize>(
    seed: &Seed,
    point: &[f64; N],
    gradient: fn(usize) -> [f64; N],
) -> f64 {
    let unskew = unskew_factor(N);

    let stretch = point.iter().sum::<f64>() * skew_factor(N);
    let (cell, frac) = math::split(&point.map(|c| c + stretch));

    // Offset from the cell origin, measured in input space.
    let squish = frac.iter().sum::<f64>() * unskew;
    let origin_delta = frac.map(|f| f - squish);

    // Axes by descending offset; the stable sort keeps the lower axis first
    // on ties.
    let mut order: [usize; N] = array::from_fn(|axis| axis);
    order.sort_by(|&a, &b| frac[b].total_cmp(&frac[a]));

    let mut value = 0.0;
    let mut corner = [0; N];
    for k in 0..=N {
        if k > 0 {
            corner[order[k - 1]] = 1;
        }

        let shift = k as f64 * unskew;
        let mut delta = origin_delta;
        for axis in 0..N {
            delta[axis] += shift - corner[axis] as f64;
        }

        let attn = RADIUS_SQ - math::dot(&delta, &delta);
        if attn <= 0.0 {
            continue;
        }
        let g = gradient(seed.hash(&math::offset_cell(&cell, &corner)));
        value += attn.powi(4) * math::dot(&g, &delta);
    }
    value
}
