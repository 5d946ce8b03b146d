// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;
use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use utils::{Deserializable, Randomizable, Serializable};

// FIELD ELEMENT
// ================================================================================================

/// Defines an element in a finite field.
///
/// This trait defines basic arithmetic operations for elements in a prime field (e.g. addition,
/// subtraction, multiplication, inversion) as well as conversions from small integers and a
/// canonical byte encoding. Implementations are expected to be constant time.
pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + PartialEq
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + DivAssign<Self>
    + Neg<Output = Self>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + Randomizable
    + Serializable
    + Deserializable
{
    /// A type defining positive integers big enough to describe the field modulus with no loss
    /// of precision; exponents passed to [exp](Self::exp) are of this type.
    type PositiveInteger: Debug + Copy + PartialEq + PartialOrd + From<u32> + From<u64>;

    /// Number of bytes needed to encode an element.
    const ELEMENT_BYTES: usize;

    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this field element added to itself.
    #[must_use]
    fn double(self) -> Self {
        self + self
    }

    /// Returns this field element raised to power 2.
    #[must_use]
    fn square(self) -> Self {
        self * self
    }

    /// Exponentiates this field element by `power` parameter.
    #[must_use]
    fn exp(self, power: Self::PositiveInteger) -> Self;

    /// Returns a multiplicative inverse of this field element. If this element is ZERO, ZERO is
    /// returned.
    #[must_use]
    fn inv(self) -> Self;

    // INITIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Returns a vector of length `n` initialized with all ZERO elements.
    fn zeroed_vector(n: usize) -> Vec<Self> {
        vec![Self::ZERO; n]
    }
}

// STARK FIELD
// ================================================================================================

/// Defines a prime field with a large multiplicative subgroup of power-of-two order.
///
/// Such fields support number-theoretic transforms over any domain of size 2^n where n does not
/// exceed [TWO_ADICITY](Self::TWO_ADICITY).
pub trait StarkField: FieldElement {
    /// Prime modulus of the field. Must be of the form k * 2^n + 1 with k odd.
    const MODULUS: Self::PositiveInteger;

    /// The number of bits needed to represents `Self::MODULUS`.
    const MODULUS_BITS: u32;

    /// A multiplicative generator of the field.
    const GENERATOR: Self;

    /// Let Self::MODULUS = k * 2^n + 1; then, TWO_ADICITY is n.
    const TWO_ADICITY: u32;

    /// Let Self::MODULUS = k * 2^n + 1; then, TWO_ADIC_ROOT_OF_UNITY is 2^n root of unity
    /// computed as Self::GENERATOR^k.
    const TWO_ADIC_ROOT_OF_UNITY: Self;

    /// Returns the primitive root of unity of order 2^n.
    ///
    /// # Panics
    /// Panics if n is zero or the root of unity for the specified order does not exist in this
    /// field.
    fn get_root_of_unity(n: u32) -> Self {
        assert!(n != 0, "cannot get root of unity for n = 0");
        assert!(n <= Self::TWO_ADICITY, "order cannot exceed 2^{}", Self::TWO_ADICITY);
        let mut root = Self::TWO_ADIC_ROOT_OF_UNITY;
        for _ in n..Self::TWO_ADICITY {
            root = root.square();
        }
        root
    }

    /// Returns byte representation of the field modulus in little-endian byte order.
    fn get_modulus_le_bytes() -> Vec<u8>;

    /// Returns a canonical integer representation of the field element.
    fn as_int(&self) -> Self::PositiveInteger;
}
