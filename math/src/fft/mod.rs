// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! FFT-based conversion between coefficient and evaluation forms of polynomials.
//!
//! Functions in this module compute forward and inverse number-theoretic transforms of
//! power-of-two-length slices over domains which are multiplicative subgroups of a finite field.
//! Their runtime complexity is O(`n` log `n`), where `n` is the domain size.
//!
//! The forward transform evaluates a polynomial given by its coefficients at the points
//! `[1, w, w^2, ..., w^(n-1)]`, where `w` is the primitive root of unity of order `n`. The
//! inverse transform interpolates such evaluations back into coefficients.
//!
//! The roots of unity are taken from [FftSettings], which is built once for the largest
//! transform length and then reused by transforms of any smaller power-of-two length.

use alloc::vec::Vec;

use tracing::{debug, instrument};
#[cfg(feature = "concurrent")]
use utils::iterators::*;

use crate::{errors::FftError, field::StarkField};

mod serial;
mod settings;
pub use settings::FftSettings;

#[cfg(feature = "concurrent")]
mod concurrent;


// CONSTANTS
// ================================================================================================
const MIN_CONCURRENT_SIZE: usize = 1024;

// FFT DIRECTION
// ================================================================================================

/// Defines the direction of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftDirection {
    /// Coefficients to evaluations, using the roots of unity.
    Forward,
    /// Evaluations to coefficients, using the inverse roots of unity and scaling by `1/n`.
    Inverse,
}

// TRANSFORMS
// ================================================================================================

/// Computes the transform of `input` in the specified `direction` and writes the result into
/// `out`.
///
/// The length `n` of `input` must be a power of two no greater than `settings.max_width()`, and
/// `out` must have the same length. The roots of unity of order `n` are read from the settings
/// tables with stride `settings.max_width() / n`, so the result does not depend on the width of
/// the settings.
///
/// For the forward direction, `out[i] = sum(input[j] * w^(i * j))`; for the inverse direction,
/// `out[i] = (1 / n) * sum(input[j] * w^(-i * j))`, where `w` is the primitive root of unity of
/// order `n`. Transforming in one direction and then in the other returns the original values.
///
/// When `concurrent` feature is enabled, transforms of at least 1024 values are computed in
/// multiple threads.
///
/// # Errors
/// Returns an error, without writing anything into `out`, if:
/// * The length of `input` is zero, not a power of two, or greater than the settings width.
/// * The length of `out` differs from the length of `input`.
/// * The length of `input` has no inverse in the field (inverse direction only).
///
/// # Examples
/// ```
/// # use kzg_math::fft::*;
/// # use kzg_math::{fields::f255::BaseElement, FieldElement};
/// let settings = FftSettings::<BaseElement>::new(4).unwrap();
///
/// // constant polynomial p(x) = 5 evaluates to 5 everywhere
/// let mut coefficients = [BaseElement::ZERO; 4];
/// coefficients[0] = BaseElement::new(5);
/// let mut evaluations = [BaseElement::ZERO; 4];
/// fft(&mut evaluations, &coefficients, FftDirection::Forward, &settings).unwrap();
/// assert_eq!([BaseElement::new(5); 4], evaluations);
///
/// let mut result = [BaseElement::ZERO; 4];
/// fft(&mut result, &evaluations, FftDirection::Inverse, &settings).unwrap();
/// assert_eq!(coefficients, result);
/// ```
#[instrument(level = "trace", skip_all, fields(n = input.len(), direction = ?direction))]
pub fn fft<B: StarkField>(
    out: &mut [B],
    input: &[B],
    direction: FftDirection,
    settings: &FftSettings<B>,
) -> Result<(), FftError> {
    let n = input.len();
    let max_width = settings.max_width();
    if n == 0 || !n.is_power_of_two() || n > max_width {
        debug!(n, max_width, "rejected transform length");
        return Err(FftError::InvalidLength(n));
    }
    if out.len() != n {
        debug!(n, out_len = out.len(), "rejected output buffer");
        return Err(FftError::MismatchedBufferLength(n, out.len()));
    }

    let roots_stride = max_width / n;
    match direction {
        FftDirection::Forward => {
            fft_fast(out, input, settings.expanded_roots(), roots_stride);
        }
        FftDirection::Inverse => {
            let inv_length = B::from(n as u64).inv();
            if inv_length == B::ZERO {
                debug!(n, "transform length is not invertible");
                return Err(FftError::NonInvertibleLength(n));
            }
            fft_fast(out, input, settings.reverse_roots(), roots_stride);
            scale(out, inv_length);
        }
    }

    Ok(())
}

/// Evaluates the polynomial with coefficients `input` over the roots of unity of order
/// `input.len()` and writes the evaluations into `out`.
///
/// This is equivalent to calling [fft()] with [FftDirection::Forward].
pub fn forward<B: StarkField>(
    out: &mut [B],
    input: &[B],
    settings: &FftSettings<B>,
) -> Result<(), FftError> {
    fft(out, input, FftDirection::Forward, settings)
}

/// Interpolates evaluations `input` over the roots of unity of order `input.len()` into the
/// coefficients of a polynomial and writes them into `out`.
///
/// This is equivalent to calling [fft()] with [FftDirection::Inverse].
pub fn inverse<B: StarkField>(
    out: &mut [B],
    input: &[B],
    settings: &FftSettings<B>,
) -> Result<(), FftError> {
    fft(out, input, FftDirection::Inverse, settings)
}

/// Computes the transform of `input` in the specified `direction` and returns the result in a
/// newly allocated vector.
///
/// # Errors
/// Returns an error under the same conditions as [fft()].
pub fn fft_to_vec<B: StarkField>(
    input: &[B],
    direction: FftDirection,
    settings: &FftSettings<B>,
) -> Result<Vec<B>, FftError> {
    let mut out = B::zeroed_vector(input.len());
    fft(&mut out, input, direction, settings)?;
    Ok(out)
}

// HELPER FUNCTIONS
// ================================================================================================

fn fft_fast<B: StarkField>(out: &mut [B], input: &[B], roots: &[B], roots_stride: usize) {
    // when `concurrent` feature is enabled, run the concurrent version of the function; unless
    // the input is small, then don't bother with the concurrent version
    if cfg!(feature = "concurrent") && input.len() >= MIN_CONCURRENT_SIZE {
        #[cfg(feature = "concurrent")]
        concurrent::fft_fast(out, input, 1, roots, roots_stride);
    } else {
        serial::fft_fast(out, input, 1, roots, roots_stride);
    }
}

fn scale<B: StarkField>(values: &mut [B], factor: B) {
    utils::iter_mut!(values, MIN_CONCURRENT_SIZE).for_each(|value| *value *= factor);
}
