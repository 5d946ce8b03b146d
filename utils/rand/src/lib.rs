// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crates contains functions for generating random values.
//!
//! These functions are intended to be used in tests and benchmarks. When compiled to
//! WebAssembly target, all of the functions are omitted.

pub use internal::*;

#[cfg(not(target_family = "wasm"))]
mod internal {
    use rand::prelude::*;
    use utils::Randomizable;

    // RANDOM VALUE GENERATION
    // ============================================================================================

    /// Returns a single random value of the specified type.
    ///
    /// # Panics
    /// Panics if:
    /// * A valid value requires over 32 bytes.
    /// * A valid value could not be generated after 1000 tries.
    pub fn rand_value<R: Randomizable>() -> R {
        let mut rng = rand::rng();
        for _ in 0..1000 {
            let bytes = rng.random::<[u8; 32]>();
            if let Some(value) = R::from_random_bytes(&bytes[..R::VALUE_SIZE]) {
                return value;
            }
        }

        panic!("failed to generate a random value");
    }

    /// Returns a vector of random values of the specified type and the specified length.
    ///
    /// # Panics
    /// Panics if:
    /// * A valid value requires over 32 bytes.
    /// * Not enough valid values could be generated after 1000 * `n` tries.
    pub fn rand_vector<R: Randomizable>(n: usize) -> Vec<R> {
        let seed = rand::rng().random::<[u8; 32]>();
        prng_vector(seed, n)
    }

    /// Returns a vector of values of the specified type and the specified length generated
    /// pseudo-randomly from the specified `seed`.
    ///
    /// # Panics
    /// Panics if:
    /// * A valid value requires over 32 bytes.
    /// * Not enough valid values could be generated after 1000 * `n` tries.
    pub fn prng_vector<R: Randomizable>(seed: [u8; 32], n: usize) -> Vec<R> {
        let mut result = Vec::with_capacity(n);
        if n == 0 {
            return result;
        }

        let mut g = StdRng::from_seed(seed);
        for _ in 0..1000 * n {
            let bytes = g.random::<[u8; 32]>();
            if let Some(element) = R::from_random_bytes(&bytes[..R::VALUE_SIZE]) {
                result.push(element);
                if result.len() == n {
                    return result;
                }
            }
        }

        panic!("failed to generate enough random values");
    }
}

#[cfg(target_family = "wasm")]
mod internal {}

// TESTS
// ================================================================================================
