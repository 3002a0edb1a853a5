//! Support operations shared by the noise families.

/// Split a point into its integer lattice cell and the offset within it.
///
/// Uses `floor`, so negative coordinates still produce offsets in `[0, 1)`.
/// Non-finite components saturate the cell index and yield a NaN offset,
/// which then propagates through the evaluation.
#[inline]
pub fn split<const N: usize>(point: &[f64; N]) -> ([i64; N], [f64; N]) {
    let floor = point.map(f64::floor);
    let mut frac = [0.0; N];
    for axis in 0..N {
        frac[axis] = point[axis] - floor[axis];
    }
    (floor.map(|f| f as i64), frac)
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`, flat in first and second
/// derivative at both ends.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `a` to `b`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of two vectors of equal length.
#[inline]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Add an integer offset to every axis of a lattice cell.
///
/// Wraps on overflow; saturated cells only ever feed the permutation hash.
#[inline]
pub fn offset_cell<const N: usize>(cell: &[i64; N], offset: &[i64; N]) -> [i64; N] {
    let mut out = *cell;
    for axis in 0..N {
        out[axis] = cell[axis].wrapping_add(offset[axis]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_negative() {
        let (cell, frac) = split(&[-0.25, 1.5, -3.0]);
        assert_eq!(cell, [-1, 1, -3]);
        assert_eq!(frac, [0.75, 0.5, 0.0]);
    }

    #[test]
    fn split_non_finite() {
        let (cell, frac) = split(&[f64::NAN, f64::INFINITY]);
        assert_eq!(cell, [0, i64::MAX]);
        assert!(frac[0].is_nan());
        assert!(frac[1].is_nan());
    }

    #[test]
    fn fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
        for i in 1..100 {
            let t = f64::from(i) / 100.0;
            assert!(fade(t) > fade(t - 0.01));
        }
    }

    #[test]
    fn lerp_and_dot() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), 12.0);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(offset_cell(&[i64::MAX, -1], &[1, -1]), [i64::MIN, -2]);
    }
}
