// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

// FFT ERROR
// ================================================================================================

/// Defines errors which can occur when building FFT settings or running a transform.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// The number of values to transform was zero, not a power of two, or greater than the
    /// maximum width supported by the settings.
    #[error("cannot transform {0} values; expected a non-zero power of two up to the max width")]
    InvalidLength(usize),
    /// The output buffer has a different length than the input buffer.
    #[error("output buffer must have the same length as the input; expected {0}, but was {1}")]
    MismatchedBufferLength(usize, usize),
    /// The requested maximum scale exceeds what the field (or the platform) supports.
    #[error("cannot build FFT settings for scale {0}; the maximum supported scale is {1}")]
    InvalidScale(u32, u32),
    /// The field returned zero when inverting the transform length.
    ///
    /// This is unreachable for any [StarkField](crate::StarkField): a transform length is at
    /// most `2^TWO_ADICITY`, which is smaller than the field modulus, so it always has an
    /// inverse. The variant only guards against a field implementation which breaks that
    /// contract.
    #[error("transform length {0} has no inverse in the field")]
    NonInvertibleLength(usize),
}
