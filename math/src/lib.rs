// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains modules with mathematical operations needed by KZG-style polynomial
//! commitment schemes over the BLS12-381 curve.
//!
//! # Finite field arithmetic
//! [Finite field](https://en.wikipedia.org/wiki/Finite_field) arithmetic is defined by the
//! [FieldElement] and [StarkField] traits. The [fields::f255] module implements the scalar field
//! of BLS12-381, a 255-bit prime field with two-adicity 32.
//!
//! # Fast Fourier transform
//! The [fft] module converts polynomials between coefficient form and evaluation form over the
//! roots of unity using a recursive radix-2 number-theoretic transform:
//!
//! * [fft::FftSettings] precomputes the roots of unity of order `2^max_scale` and their
//!   inverses once, so that they can be shared by any number of transforms.
//! * [fft::fft()] transforms `n` values for any power of two `n` up to the settings width in
//!   either [fft::FftDirection].
//!
//! # Concurrent execution
//! When the crate is compiled with `concurrent` feature enabled, large transforms and power
//! series generation are executed in multiple threads. The number of threads can be configured
//! via `RAYON_NUM_THREADS` environment variable, and usually defaults to the number of logical
//! cores on the machine.
#![no_std]

#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod fft;
pub mod utils;

mod field;
pub use field::{FieldElement, StarkField};
pub mod fields {
    //! Finite field implementations.
    //!
    //! This module contains concrete implementations of base fields suitable for
    //! number-theoretic transforms.

    pub use super::field::f255;
}

mod errors;
pub use errors::FftError;

pub use crate::utils::{get_power_series, get_power_series_with_offset, log2};
