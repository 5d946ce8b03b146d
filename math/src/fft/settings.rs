// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use tracing::debug;

use crate::{errors::FftError, field::StarkField, utils::get_power_series};

// FFT SETTINGS
// ================================================================================================

/// Precomputed roots of unity for transforms of up to `2^max_scale` values.
///
/// For the primitive root of unity `w` of order `max_width = 2^max_scale`, the settings hold
/// `expanded_roots = [w^0, w^1, ..., w^(max_width - 1)]` and
/// `reverse_roots = [w^0, w^-1, ..., w^-(max_width - 1)]`.
///
/// A single instance can be shared by reference across any number of transforms (including
/// transforms running concurrently on different threads) of any power-of-two length up to
/// `max_width`. The tables are never modified after construction.
///
/// # Examples
/// ```
/// # use kzg_math::fft::FftSettings;
/// # use kzg_math::{fields::f255::BaseElement, FieldElement};
/// let settings = FftSettings::<BaseElement>::new(4).unwrap();
/// assert_eq!(16, settings.max_width());
///
/// for (&a, &b) in settings.expanded_roots().iter().zip(settings.reverse_roots()) {
///     assert_eq!(BaseElement::ONE, a * b);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FftSettings<B: StarkField> {
    max_scale: u32,
    root_of_unity: B,
    expanded_roots: Vec<B>,
    reverse_roots: Vec<B>,
}

impl<B: StarkField> FftSettings<B> {
    /// Returns new settings for transforms of up to `2^max_scale` values.
    ///
    /// # Errors
    /// Returns [FftError::InvalidScale] if the field specified by `B` does not contain a
    /// multiplicative subgroup of size `2^max_scale`, or if `2^max_scale` does not fit into
    /// `usize`.
    pub fn new(max_scale: u32) -> Result<Self, FftError> {
        let supported_scale = B::TWO_ADICITY.min(usize::BITS - 1);
        if max_scale > supported_scale {
            debug!(max_scale, supported_scale, "rejected FFT settings scale");
            return Err(FftError::InvalidScale(max_scale, supported_scale));
        }

        let max_width = 1usize << max_scale;
        let root_of_unity = match max_scale {
            0 => B::ONE,
            _ => B::get_root_of_unity(max_scale),
        };

        let expanded_roots = get_power_series(root_of_unity, max_width);
        let reverse_roots = get_power_series(root_of_unity.inv(), max_width);
        debug!(max_scale, max_width, "built FFT settings");

        Ok(Self { max_scale, root_of_unity, expanded_roots, reverse_roots })
    }

    /// Returns the base 2 logarithm of the largest supported transform length.
    pub fn max_scale(&self) -> u32 {
        self.max_scale
    }

    /// Returns the largest supported transform length.
    pub fn max_width(&self) -> usize {
        self.expanded_roots.len()
    }

    /// Returns the primitive root of unity of order `max_width`.
    pub fn root_of_unity(&self) -> B {
        self.root_of_unity
    }

    /// Returns the powers of the root of unity `[w^0, w^1, ..., w^(max_width - 1)]`.
    pub fn expanded_roots(&self) -> &[B] {
        &self.expanded_roots
    }

    /// Returns the powers of the inverse root of unity `[w^0, w^-1, ..., w^-(max_width - 1)]`.
    pub fn reverse_roots(&self) -> &[B] {
        &self.reverse_roots
    }
}
