//! Seeded procedural noise.
//!
//! A [`Seed`] turns a 32-bit integer into an immutable permutation table.
//! Every noise function is a pure function of a seed and a point, so the same
//! seed always produces the same field, and a seed can be shared between
//! threads without locking.
//!
//! # Noise families
//!
//! - Perlin gradient noise in 2, 3 and 4 dimensions, in `[-1, 1]`
//! - Simplex-grid gradient noise in 2 and 3 dimensions, in `[-1, 1]`
//! - Cellular (Worley) noise in 2, 3 and 4 dimensions, with Euclidean or
//!   Manhattan distance, reporting the nearest cell's value, the nearest
//!   distance, or the gap between the two nearest distances
//!
//! ```
//! use seednoise::{Seed, cell3_range, perlin2};
//!
//! let seed = Seed::new(42);
//! let height = perlin2(&seed, &[0.2, 0.3]);
//! assert!((-1.0..=1.0).contains(&height));
//! assert!(cell3_range(&seed, &[0.2, 0.3, 1.5]) >= 0.0);
//! ```
//!
//! Composition such as octave summation or domain warping is left to callers.

/// Cellular noise and its metric and selector choices.
pub mod cell;
/// Error types used across the crate.
pub mod error;
/// Fixed gradient sets.
mod gradient;
/// Numeric helpers shared by the noise families.
mod math;
/// Simplex-grid noise.
pub mod open_simplex;
/// Perlin noise.
pub mod perlin;
/// Central registry of noise names and slice-based dispatch.
pub mod registry;
/// The seeded permutation table.
pub mod seed;

pub use crate::{
    cell::{
        cell2_manhattan_range, cell2_manhattan_range_inv, cell2_manhattan_value, cell2_range,
        cell2_range_inv, cell2_value, cell3_manhattan_range, cell3_manhattan_range_inv,
        cell3_manhattan_value, cell3_range, cell3_range_inv, cell3_value, cell4_manhattan_range,
        cell4_manhattan_range_inv, cell4_manhattan_value, cell4_range, cell4_range_inv,
        cell4_value,
    },
    open_simplex::{open_simplex2, open_simplex3},
    perlin::{perlin2, perlin3, perlin4},
    registry::Noise,
    seed::Seed,
};

/// Look up a noise function by name, e.g. `"perlin3"` or `"cell2_range_inv"`.
///
/// Returns an error if the name is not registered.
pub fn noise_from_name(name: &str) -> error::Result<Noise> {
    registry::construct(name)
}
