// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use utils::{iterators::*, rayon};

use super::{serial, MIN_CONCURRENT_SIZE};
use crate::field::FieldElement;

// CORE FFT ALGORITHM
// ================================================================================================

/// Recursive FFT which transforms the even and odd halves in parallel.
///
/// Both halves write into disjoint parts of `out` and only read `input` and `roots`, so the
/// results are identical to [serial::fft_fast]. Once the sub-transforms become smaller than
/// [MIN_CONCURRENT_SIZE], the serial algorithm is used.
pub(super) fn fft_fast<E: FieldElement>(
    out: &mut [E],
    input: &[E],
    stride: usize,
    roots: &[E],
    roots_stride: usize,
) {
    let n = out.len();
    if n < MIN_CONCURRENT_SIZE {
        serial::fft_fast(out, input, stride, roots, roots_stride);
        return;
    }

    let (evens, odds) = out.split_at_mut(n / 2);
    rayon::join(
        || fft_fast(evens, input, stride * 2, roots, roots_stride * 2),
        || fft_fast(odds, &input[stride..], stride * 2, roots, roots_stride * 2),
    );

    evens
        .par_iter_mut()
        .zip(odds.par_iter_mut())
        .enumerate()
        .with_min_len(MIN_CONCURRENT_SIZE / 2)
        .for_each(|(i, (x, y))| serial::butterfly_twiddle(x, y, roots[i * roots_stride]));
}
