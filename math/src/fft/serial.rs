// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::field::FieldElement;

// CORE FFT ALGORITHM
// ================================================================================================

/// Out-of-place recursive radix-2 decimation-in-time FFT.
///
/// Transforms `out.len()` values read from `input` at indexes `0, stride, 2 * stride, ...` using
/// twiddles `roots[0], roots[roots_stride], roots[2 * roots_stride], ...`. The even-indexed
/// inputs are transformed into the first half of `out` and the odd-indexed inputs into the
/// second half; the halves are then combined with one layer of butterflies. Output is in natural
/// order.
///
/// Arguments are not validated: `out.len()` must be a power of two, `input` must hold at least
/// `(out.len() - 1) * stride + 1` values, and `roots` must hold at least
/// `(out.len() / 2 - 1) * roots_stride + 1` values.
pub(super) fn fft_fast<E: FieldElement>(
    out: &mut [E],
    input: &[E],
    stride: usize,
    roots: &[E],
    roots_stride: usize,
) {
    match out.len() {
        1 => out[0] = input[0],
        2 => {
            // roots[0] is always ONE, so the twiddle can be skipped
            let (a, b) = (input[0], input[stride]);
            out[0] = a + b;
            out[1] = a - b;
        }
        n => {
            let (evens, odds) = out.split_at_mut(n / 2);
            fft_fast(evens, input, stride * 2, roots, roots_stride * 2);
            fft_fast(odds, &input[stride..], stride * 2, roots, roots_stride * 2);

            for (i, (x, y)) in evens.iter_mut().zip(odds.iter_mut()).enumerate() {
                butterfly_twiddle(x, y, roots[i * roots_stride]);
            }
        }
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Sets `x` to `x + y * twiddle` and `y` to `x - y * twiddle`.
#[inline(always)]
pub(super) fn butterfly_twiddle<E: FieldElement>(x: &mut E, y: &mut E, twiddle: E) {
    let t = *y * twiddle;
    *y = *x - t;
    *x += t;
}
