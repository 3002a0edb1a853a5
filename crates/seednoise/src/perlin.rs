//! Classic gradient (Perlin) noise in 2, 3 and 4 dimensions.
//!
//! Each corner of the lattice cell containing the point contributes the dot
//! product of its gradient with the offset from the corner to the point. The
//! contributions are blended with the quintic fade curve. With unit gradients
//! the blend never exceeds `√N / 2` in magnitude, so results are rescaled by
//! `2 / √N` and lie in `[-1, 1]`. Every integer lattice point evaluates to
//! zero.

use smallvec::SmallVec;

use crate::{gradient, math, seed::Seed};

/// 2D Perlin noise at `point`, in `[-1, 1]`.
pub fn perlin2(seed: &Seed, point: &[f64; 2]) -> f64 {
    perlin(seed, point, gradient::get2)
}

/// 3D Perlin noise at `point`, in `[-1, 1]`.
pub fn perlin3(seed: &Seed, point: &[f64; 3]) -> f64 {
    perlin(seed, point, gradient::get3)
}

/// 4D Perlin noise at `point`, in `[-1, 1]`.
pub fn perlin4(seed: &Seed, point: &[f64; 4]) -> f64 {
    perlin(seed, point, gradient::get4)
}

/// Shared engine: `2^N` corner contributions reduced one axis at a time.
fn perlin<const N: usize>(
    seed: &Seed,
    point: &[f64; N],
    gradient: fn(usize) -> [f64; N],
) -> f64 {
    let (cell, frac) = math::split(point);

    // Corner `mask` sits at `cell + 1` on every axis whose bit is set; bit 0
    // is the x axis, so neighbouring entries differ along x.
    let mut values: SmallVec<[f64; 16]> = (0..1usize << N)
        .map(|mask| {
            let mut offset = [0; N];
            let mut delta = frac;
            for axis in 0..N {
                if (mask >> axis) & 1 == 1 {
                    offset[axis] = 1;
                    delta[axis] -= 1.0;
                }
            }
            let g = gradient(seed.hash(&math::offset_cell(&cell, &offset)));
            math::dot(&g, &delta)
        })
        .collect();

    for t in frac.map(math::fade) {
        values = values
            .chunks_exact(2)
            .map(|pair| math::lerp(pair[0], pair[1], t))
            .collect();
    }

    values[0] * 2.0 / (N as f64).sqrt()
}
