//! Fixed gradient sets for each dimensionality.
//!
//! These are constants of the algorithms. A seed only decides which gradient
//! applies at a lattice point, never the gradients themselves. Every vector
//! has unit length.

use std::f64::consts::FRAC_1_SQRT_2;

/// `1 / √3`, the scale that normalises the 4D gradient set.
const FRAC_1_SQRT_3: f64 = 0.577_350_269_189_625_8;

/// Axis directions and diagonals.
const GRAD2: [[f64; 2]; 8] = [
    [1.0, 0.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [0.0, -1.0],
    [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    [-FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
];

/// Directions to the midpoints of the twelve cube edges.
const GRAD3: [[f64; 3]; 12] = {
    const D: f64 = FRAC_1_SQRT_2;
    [
        [D, D, 0.0],
        [-D, D, 0.0],
        [D, -D, 0.0],
        [-D, -D, 0.0],
        [D, 0.0, D],
        [-D, 0.0, D],
        [D, 0.0, -D],
        [-D, 0.0, -D],
        [0.0, D, D],
        [0.0, -D, D],
        [0.0, D, -D],
        [0.0, -D, -D],
    ]
};

/// Directions to the midpoints of the 32 edges of a tesseract.
const GRAD4: [[f64; 4]; 32] = build_grad4();

/// Place `±1/√3` on three axes and zero on the fourth, for every choice of
/// zero axis and every sign combination.
const fn build_grad4() -> [[f64; 4]; 32] {
    let mut out = [[0.0; 4]; 32];
    let mut zero_axis = 0;
    while zero_axis < 4 {
        let mut signs = 0;
        while signs < 8 {
            let mut vector = [0.0; 4];
            let mut bit = 0;
            let mut axis = 0;
            while axis < 4 {
                if axis != zero_axis {
                    vector[axis] = if signs & (1 << bit) == 0 {
                        FRAC_1_SQRT_3
                    } else {
                        -FRAC_1_SQRT_3
                    };
                    bit += 1;
                }
                axis += 1;
            }
            out[zero_axis * 8 + signs] = vector;
            signs += 1;
        }
        zero_axis += 1;
    }
    out
}

/// The 2D gradient selected by a lattice hash.
#[inline]
pub fn get2(index: usize) -> [f64; 2] {
    GRAD2[index & 7]
}

/// The 3D gradient selected by a lattice hash.
#[inline]
pub fn get3(index: usize) -> [f64; 3] {
    GRAD3[index % 12]
}

/// The 4D gradient selected by a lattice hash.
#[inline]
pub fn get4(index: usize) -> [f64; 4] {
    GRAD4[index & 31]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: &[f64]) -> f64 {
        v.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    #[test]
    fn unit_length() {
        for i in 0..256 {
            assert!((length(&get2(i)) - 1.0).abs() < 1e-12);
            assert!((length(&get3(i)) - 1.0).abs() < 1e-12);
            assert!((length(&get4(i)) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn grad4_distinct() {
        for (i, a) in GRAD4.iter().enumerate() {
            for b in &GRAD4[i + 1..] {
                assert_ne!(a, b);
            }
            assert_eq!(a.iter().filter(|c| **c == 0.0).count(), 1);
        }
    }

    #[test]
    fn sets_are_balanced() {
        for axis in 0..2 {
            assert_eq!(GRAD2.iter().map(|g| g[axis]).sum::<f64>(), 0.0);
        }
        for axis in 0..3 {
            assert_eq!(GRAD3.iter().map(|g| g[axis]).sum::<f64>(), 0.0);
        }
    }
}
