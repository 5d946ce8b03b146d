// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

#[cfg(feature = "concurrent")]
use utils::iterators::*;
use utils::uninit_vector;

use crate::field::FieldElement;


// CONSTANTS
// ================================================================================================

const MIN_CONCURRENT_SIZE: usize = 1024;

// MATH FUNCTIONS
// ================================================================================================

/// Generates a vector with values [1, b, b^2, b^3, b^4, ..., b^(n-1)].
///
/// When `concurrent` feature is enabled, series generation is done concurrently in multiple
/// threads.
///
/// # Examples
/// ```
/// # use kzg_math::get_power_series;
/// # use kzg_math::{fields::f255::BaseElement, FieldElement};
/// let n = 2048;
/// let b = BaseElement::from(3u8);
///
/// let expected = (0..n).map(|p| b.exp((p as u64).into())).collect::<Vec<_>>();
///
/// let actual = get_power_series(b, n);
/// assert_eq!(expected, actual);
/// ```
pub fn get_power_series<E: FieldElement>(b: E, n: usize) -> Vec<E> {
    get_power_series_with_offset(b, E::ONE, n)
}

/// Generates a vector with values [s, s * b, s * b^2, s * b^3, s * b^4, ..., s * b^(n-1)].
///
/// When `concurrent` feature is enabled, series generation is done concurrently in multiple
/// threads.
pub fn get_power_series_with_offset<E: FieldElement>(b: E, s: E, n: usize) -> Vec<E> {
    let mut result = unsafe { uninit_vector(n) };
    if cfg!(feature = "concurrent") && n >= MIN_CONCURRENT_SIZE && n.is_power_of_two() {
        #[cfg(feature = "concurrent")]
        {
            let batch_size = n / utils::rayon::current_num_threads().next_power_of_two().min(n);
            result.par_chunks_mut(batch_size).enumerate().for_each(|(i, batch)| {
                let batch_start = (i * batch_size) as u64;
                fill_power_series(batch, b, s * b.exp(batch_start.into()));
            });
        }
    } else {
        fill_power_series(&mut result, b, s);
    }
    result
}

/// Returns base 2 logarithm of `n`, where `n` is a power of two.
///
/// # Panics
/// Panics if `n` is not a power of two.
pub fn log2(n: usize) -> u32 {
    assert!(n.is_power_of_two(), "n must be a power of two");
    n.trailing_zeros()
}

// HELPER FUNCTIONS
// ------------------------------------------------------------------------------------------------

#[inline(always)]
fn fill_power_series<E: FieldElement>(result: &mut [E], base: E, start: E) {
    let mut value = start;
    for item in result.iter_mut() {
        *item = value;
        value *= base;
    }
}
