//! C ABI for `seednoise`.
//!
//! A seed lives behind an opaque pointer. Create it with [`noise_seed_new`],
//! pass it to any `noise_*` query, and free it with [`noise_seed_delete`]:
//!
//! ```c
//! Seed *seed = noise_seed_new(42);
//! double v = noise_perlin3(seed, 0.2, 0.3, 1.5);
//! noise_seed_delete(seed);
//! ```
//!
//! Queries do not check the pointer. Passing a deleted or foreign pointer is
//! undefined behaviour, as is deleting the same seed twice.
//!
//! `include/seednoise.h` declares every function exported here.

use std::ffi::c_double;

use seednoise::Seed;

/// Allocate a seed table for `seed`. Free it with [`noise_seed_delete`].
#[unsafe(no_mangle)]
pub extern "C" fn noise_seed_new(seed: u32) -> *mut Seed {
    Box::into_raw(Box::new(Seed::new(seed)))
}

/// Free a seed allocated by [`noise_seed_new`]. A null pointer is ignored.
///
/// # Safety
///
/// `seed` must be null or a pointer returned by [`noise_seed_new`] that has
/// not already been deleted.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn noise_seed_delete(seed: *mut Seed) {
    if seed.is_null() {
        return;
    }
    // SAFETY: the pointer came from `Box::into_raw` and is released once.
    drop(unsafe { Box::from_raw(seed) });
}

/// Export one `noise_*` query per library function.
macro_rules! wrap_noise {
    ($($wrapper:ident => $func:ident($($arg:ident),+);)*) => {
        $(
            #[doc = concat!("C entry point for `seednoise::", stringify!($func), "`.")]
            ///
            /// # Safety
            ///
            /// `seed` must be a live pointer from [`noise_seed_new`].
            #[unsafe(no_mangle)]
            pub unsafe extern "C" fn $wrapper(seed: *const Seed, $($arg: c_double),+) -> c_double {
                // SAFETY: the caller guarantees `seed` is live and unaliased by a delete.
                let seed = unsafe { &*seed };
                seednoise::$func(seed, &[$($arg),+])
            }
        )*
    };
}

wrap_noise! {
    noise_perlin2 => perlin2(x, y);
    noise_perlin3 => perlin3(x, y, z);
    noise_perlin4 => perlin4(x, y, z, w);

    noise_open_simplex2 => open_simplex2(x, y);
    noise_open_simplex3 => open_simplex3(x, y, z);

    noise_cell2_value => cell2_value(x, y);
    noise_cell3_value => cell3_value(x, y, z);
    noise_cell4_value => cell4_value(x, y, z, w);
    noise_cell2_range => cell2_range(x, y);
    noise_cell3_range => cell3_range(x, y, z);
    noise_cell4_range => cell4_range(x, y, z, w);
    noise_cell2_range_inv => cell2_range_inv(x, y);
    noise_cell3_range_inv => cell3_range_inv(x, y, z);
    noise_cell4_range_inv => cell4_range_inv(x, y, z, w);

    noise_cell2_manhattan_value => cell2_manhattan_value(x, y);
    noise_cell3_manhattan_value => cell3_manhattan_value(x, y, z);
    noise_cell4_manhattan_value => cell4_manhattan_value(x, y, z, w);
    noise_cell2_manhattan_range => cell2_manhattan_range(x, y);
    noise_cell3_manhattan_range => cell3_manhattan_range(x, y, z);
    noise_cell4_manhattan_range => cell4_manhattan_range(x, y, z, w);
    noise_cell2_manhattan_range_inv => cell2_manhattan_range_inv(x, y);
    noise_cell3_manhattan_range_inv => cell3_manhattan_range_inv(x, y, z);
    noise_cell4_manhattan_range_inv => cell4_manhattan_range_inv(x, y, z, w);
}
