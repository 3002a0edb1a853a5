//! Seeded permutation table shared by every noise family.

use std::{array, fmt};

use rand::{SeedableRng, seq::SliceRandom};
use rand_xorshift::XorShiftRng;
use tracing::debug;

/// Number of distinct entries in the permutation table.
pub const TABLE_SIZE: usize = 256;

/// Mask that wraps a lattice coordinate into `0..TABLE_SIZE`.
const TABLE_MASK: i64 = TABLE_SIZE as i64 - 1;

/// An immutable permutation table derived from a 32-bit seed.
///
/// The table is a uniformly shuffled permutation of `0..256`, stored twice in
/// a row so that chained lookups never need to wrap. Two seeds built from the
/// same integer are identical, and so is every noise value sampled from them.
///
/// A `Seed` is read-only after construction and may be shared freely between
/// threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed {
    /// The integer this table was derived from.
    value: u32,
    /// Permutation of `0..TABLE_SIZE`, repeated once.
    perm: [u8; TABLE_SIZE * 2],
}

impl Seed {
    /// Build the permutation table for `seed`.
    pub fn new(seed: u32) -> Self {
        let mut rng = XorShiftRng::from_seed(rng_seed(seed));
        let mut shuffled: [u8; TABLE_SIZE] = array::from_fn(|i| i as u8);
        shuffled.shuffle(&mut rng);

        let mut perm = [0; TABLE_SIZE * 2];
        perm[..TABLE_SIZE].copy_from_slice(&shuffled);
        perm[TABLE_SIZE..].copy_from_slice(&shuffled);

        debug!(seed, "built permutation table");
        Self { value: seed, perm }
    }

    /// The integer this table was derived from.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The permutation itself, one copy of `0..TABLE_SIZE`.
    pub fn permutation(&self) -> &[u8] {
        &self.perm[..TABLE_SIZE]
    }

    /// Hash an integer lattice coordinate to a value in `0..TABLE_SIZE`.
    ///
    /// Each component is wrapped into the table by two's complement masking,
    /// so negative coordinates and coordinates far from the origin are valid.
    /// Coordinates that differ by a multiple of `TABLE_SIZE` on every axis
    /// hash identically.
    #[inline]
    pub fn hash<const N: usize>(&self, cell: &[i64; N]) -> usize {
        cell.iter().fold(0, |h, &c| self.step(h + (c & TABLE_MASK) as usize))
    }

    /// Follow the permutation one step from `index` (`index < 2 * TABLE_SIZE`).
    #[inline]
    pub(crate) fn step(&self, index: usize) -> usize {
        usize::from(self.perm[index])
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seed")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

/// Expand a 32-bit seed into the generator state `[1, seed, seed, seed]`.
///
/// The leading constant keeps the XorShift state non-zero for seed 0.
fn rng_seed(seed: u32) -> [u8; 16] {
    let mut bytes = [0; 16];
    for (chunk, word) in bytes.chunks_exact_mut(4).zip([1, seed, seed, seed]) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permutation_is_bijection() {
        for value in [0, 1, 42, 0xdead_beef, u32::MAX] {
            let seed = Seed::new(value);
            let mut seen = [false; TABLE_SIZE];
            for &p in seed.permutation() {
                assert!(!seen[p as usize], "seed {value}: {p} repeated");
                seen[p as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn table_is_doubled() {
        let seed = Seed::new(7);
        assert_eq!(seed.perm[..TABLE_SIZE], seed.perm[TABLE_SIZE..]);
    }

    #[test]
    fn deterministic() {
        assert_eq!(Seed::new(42), Seed::new(42));
        assert_eq!(Seed::new(42).value(), 42);
        assert_ne!(Seed::new(1).permutation(), Seed::new(2).permutation());
    }

    #[test]
    fn shuffled() {
        let identity: Vec<u8> = (0..=255).collect();
        assert_ne!(Seed::new(0).permutation(), identity.as_slice());
    }

    #[test]
    fn hash_wraps() {
        let seed = Seed::new(3);
        for c in -600i64..600 {
            let h = seed.hash(&[c, -c]);
            assert!(h < TABLE_SIZE);
            assert_eq!(h, seed.hash(&[c + 256, -c - 512]));
        }
        assert!(seed.hash(&[i64::MAX, i64::MIN, 0, -1]) < TABLE_SIZE);
    }

    #[test]
    fn hash_matches_chained_lookup() {
        let seed = Seed::new(99);
        let (x, y, z) = (5usize, 200usize, 17usize);
        let expected = seed.step(seed.step(seed.step(x) + y) + z);
        assert_eq!(seed.hash(&[5, 200, 17]), expected);
    }

    #[test]
    fn shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Seed>();
    }

    #[test]
    fn debug_hides_table() {
        let text = format!("{:?}", Seed::new(5));
        assert!(text.contains("value: 5"));
        assert!(!text.contains("perm"));
    }
}
