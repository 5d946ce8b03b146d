// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the 255-bit scalar field of the BLS12-381 curve with modulus
//! $r = \text{0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001}$ using
//! Montgomery representation.
//!
//! This is the field over which KZG polynomial commitments on BLS12-381 are defined. Elements
//! are stored as four 64-bit limbs in little-endian order, and all arithmetic operations are
//! constant-time.
//!
//! The field has two-adicity 32, which means it supports number-theoretic transforms over
//! domains of up to $2^{32}$ elements.

use alloc::{string::String, vec::Vec};
use core::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use utils::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Randomizable, Serializable,
    SliceReader,
};

use super::{FieldElement, StarkField};

#[cfg(test)]
mod tests;

// CONSTANTS
// ================================================================================================

/// Field modulus r, little-endian limbs.
const M: [u64; 4] = [
    0xffffffff00000001,
    0x53bda402fffe5bfe,
    0x3339d80809a1d805,
    0x73eda753299d7d48,
];

/// r - 2; exponent used for inversion.
const M_MINUS_TWO: [u64; 4] = [
    0xfffffffeffffffff,
    0x53bda402fffe5bfe,
    0x3339d80809a1d805,
    0x73eda753299d7d48,
];

/// 2^256 mod r; this is the Montgomery representation of ONE.
const R: [u64; 4] = [
    0x00000001fffffffe,
    0x5884b7fa00034802,
    0x998c4fefecbc4ff5,
    0x1824b159acc5056f,
];

/// 2^512 mod r; this is used for conversion of elements into Montgomery representation.
const R2: [u64; 4] = [
    0xc999e990f3f29c6d,
    0x2b6cedcb87925c23,
    0x05d314967254398f,
    0x0748d9d99f59ff11,
];

/// -r^{-1} mod 2^64
const U: u64 = 0xfffffffeffffffff;

/// 2^32 root of unity, computed as 7^((r - 1) / 2^32).
const G: [u64; 4] = [
    0x3829971f439f0d2b,
    0xb63683508c2280b9,
    0xd09b681922c813b4,
    0x16a2a19edfe81f20,
];

/// Number of bytes needed to represent field element
const ELEMENT_BYTES: usize = 32;

// POSITIVE INTEGER
// ================================================================================================

/// A 256-bit unsigned integer stored as four 64-bit limbs in little-endian order.
///
/// This type only carries field moduli, canonical element values, and exponents; it does not
/// implement integer arithmetic.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct U256([u64; 4]);

impl U256 {
    /// Returns the bit at the specified position (0 is the least significant bit).
    #[inline(always)]
    pub const fn bit(&self, position: usize) -> u64 {
        (self.0[position / 64] >> (position % 64)) & 1
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        Self([value as u64, 0, 0, 0])
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }
}

impl From<[u64; 4]> for U256 {
    fn from(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.iter().rev().cmp(other.0.iter().rev())
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for U256 {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "0x{:016x}{:016x}{:016x}{:016x}", self.0[3], self.0[2], self.0[1], self.0[0])
    }
}

// FIELD ELEMENT
// ================================================================================================

/// Represents base field element in the field using Montgomery representation.
///
/// Internal values represent x * R mod r where R = 2^256 mod r and x in [0, r). The backing
/// type is `[u64; 4]` but the internal values are always in the range [0, r).
#[derive(Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[u64; 4]", into = "[u64; 4]"))]
pub struct BaseElement([u64; 4]);

impl BaseElement {
    /// Creates a new field element from the provided `value`; the value is converted into
    /// Montgomery representation.
    pub const fn new(value: u64) -> BaseElement {
        Self::from_u64s([value, 0, 0, 0])
    }

    /// Creates a new field element from an integer given as four little-endian limbs; the value
    /// is converted into Montgomery representation.
    ///
    /// If the value is greater than or equal to the field modulus, modular reduction is
    /// silently performed.
    pub const fn from_u64s(limbs: [u64; 4]) -> BaseElement {
        Self(mont_mul(&limbs, &R2))
    }

    /// Returns the canonical value of this element as four little-endian limbs.
    #[inline(always)]
    pub const fn as_limbs(&self) -> [u64; 4] {
        mont_to_int(&self.0)
    }
}

impl FieldElement for BaseElement {
    type PositiveInteger = U256;

    const ZERO: Self = Self([0, 0, 0, 0]);
    const ONE: Self = Self(R);

    const ELEMENT_BYTES: usize = ELEMENT_BYTES;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    #[inline]
    fn double(self) -> Self {
        Self(add_mod(&self.0, &self.0))
    }

    #[inline]
    fn exp(self, power: Self::PositiveInteger) -> Self {
        let mut r = Self::ONE;
        for i in (0..256).rev() {
            r = r.square();
            let b = r * self;
            // Constant-time branching
            let mask = 0u64.wrapping_sub(power.bit(i));
            r.0 = select(mask, &b.0, &r.0);
        }

        r
    }

    #[inline]
    fn inv(self) -> Self {
        // Fermat's little theorem: x^(r - 2) = x^-1; for x = 0 this yields 0
        self.exp(U256(M_MINUS_TWO))
    }
}

impl StarkField for BaseElement {
    /// sage: MODULUS = 0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001 \
    /// sage: GF(MODULUS).is_prime_field() \
    /// True
    const MODULUS: Self::PositiveInteger = U256(M);
    const MODULUS_BITS: u32 = 255;

    /// sage: GF(MODULUS).primitive_element() \
    /// 7
    const GENERATOR: Self = Self::new(7);

    /// sage: is_odd((MODULUS - 1) / 2^32) \
    /// True
    const TWO_ADICITY: u32 = 32;

    /// sage: k = (MODULUS - 1) / 2^32 \
    /// sage: GF(MODULUS)(7)^k \
    /// 10238227357739495823651030575849232062558860180284477541189508159991286009131
    const TWO_ADIC_ROOT_OF_UNITY: Self = Self::from_u64s(G);

    fn get_modulus_le_bytes() -> Vec<u8> {
        M.iter().flat_map(|limb| limb.to_le_bytes()).collect()
    }

    #[inline]
    fn as_int(&self) -> Self::PositiveInteger {
        U256(mont_to_int(&self.0))
    }
}

impl Randomizable for BaseElement {
    const VALUE_SIZE: usize = Self::ELEMENT_BYTES;

    /// Interprets the bytes as a little-endian integer with the top bit cleared and accepts it
    /// only when it is smaller than the modulus.
    fn from_random_bytes(bytes: &[u8]) -> Option<Self> {
        let mut bytes: [u8; ELEMENT_BYTES] = bytes.get(..ELEMENT_BYTES)?.try_into().ok()?;
        bytes[ELEMENT_BYTES - 1] &= 0x7f;
        Self::read_from_bytes(&bytes).ok()
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

// EQUALITY CHECKS
// ================================================================================================

impl PartialEq for BaseElement {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        equals(&self.0, &other.0) == 0xffffffffffffffff
    }
}

impl Eq for BaseElement {}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(add_mod(&self.0, &rhs.0))
    }
}

impl AddAssign for BaseElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for BaseElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(sub_mod(&self.0, &rhs.0))
    }
}

impl SubAssign for BaseElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(mont_mul(&self.0, &rhs.0))
    }
}

impl MulAssign for BaseElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Div for BaseElement {
    type Output = Self;

    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inv()
    }
}

impl DivAssign for BaseElement {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs
    }
}

impl Neg for BaseElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<bool> for BaseElement {
    fn from(value: bool) -> Self {
        Self::new(value.into())
    }
}

impl From<u8> for BaseElement {
    fn from(value: u8) -> Self {
        Self::new(value.into())
    }
}

impl From<u16> for BaseElement {
    fn from(value: u16) -> Self {
        Self::new(value.into())
    }
}

impl From<u32> for BaseElement {
    fn from(value: u32) -> Self {
        Self::new(value.into())
    }
}

impl From<u64> for BaseElement {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl TryFrom<[u64; 4]> for BaseElement {
    type Error = String;

    fn try_from(limbs: [u64; 4]) -> Result<Self, Self::Error> {
        if U256(limbs) >= U256(M) {
            Err(format!(
                "invalid field element: value {} is greater than or equal to the field modulus",
                U256(limbs)
            ))
        } else {
            Ok(Self::from_u64s(limbs))
        }
    }
}

impl TryFrom<&'_ [u8]> for BaseElement {
    type Error = DeserializationError;

    /// Converts a slice of bytes into a field element; returns error if the value encoded in bytes
    /// is not a valid field element. The bytes are assumed to encode the element in the canonical
    /// representation in little-endian byte order.
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != ELEMENT_BYTES {
            return Err(DeserializationError::InvalidValue(format!(
                "invalid number of bytes for a field element; expected {} bytes, but was {} bytes",
                ELEMENT_BYTES,
                bytes.len(),
            )));
        }
        Self::read_from(&mut SliceReader::new(bytes))
    }
}

impl From<BaseElement> for [u64; 4] {
    fn from(value: BaseElement) -> Self {
        value.as_limbs()
    }
}

// SERIALIZATION / DESERIALIZATION
// ================================================================================================

impl Serializable for BaseElement {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        // convert from Montgomery representation into canonical representation
        target.write_many(&self.as_limbs());
    }

    fn get_size_hint(&self) -> usize {
        ELEMENT_BYTES
    }
}

impl Deserializable for BaseElement {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let limbs: [u64; 4] = source.read()?;
        Self::try_from(limbs).map_err(DeserializationError::InvalidValue)
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Computes a + b * c + carry, returning the low and high 64-bit words.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Computes a + b + carry, returning the sum and the outgoing carry.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = (a as u128) + (b as u128) + (carry as u128);
    (t as u64, (t >> 64) as u64)
}

/// Computes a - b - borrow, returning the difference and the outgoing borrow (0 or 1).
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub((b as u128) + (borrow as u128));
    (t as u64, (t >> 127) as u64)
}

/// Returns `if_set` when `mask` is all ones and `if_clear` when `mask` is zero.
#[inline(always)]
const fn select(mask: u64, if_set: &[u64; 4], if_clear: &[u64; 4]) -> [u64; 4] {
    [
        (if_set[0] & mask) | (if_clear[0] & !mask),
        (if_set[1] & mask) | (if_clear[1] & !mask),
        (if_set[2] & mask) | (if_clear[2] & !mask),
        (if_set[3] & mask) | (if_clear[3] & !mask),
    ]
}

/// Computes a - b over 256-bit integers, returning the difference and the outgoing borrow.
#[inline(always)]
const fn sub_inner(a: &[u64; 4], b: &[u64; 4]) -> ([u64; 4], u64) {
    let (d0, borrow) = sbb(a[0], b[0], 0);
    let (d1, borrow) = sbb(a[1], b[1], borrow);
    let (d2, borrow) = sbb(a[2], b[2], borrow);
    let (d3, borrow) = sbb(a[3], b[3], borrow);
    ([d0, d1, d2, d3], borrow)
}

/// Subtracts the modulus from `a` if `a` is not smaller than it; `a` must be smaller than 2r.
#[inline(always)]
const fn reduce_once(a: &[u64; 4]) -> [u64; 4] {
    let (d, borrow) = sub_inner(a, &M);
    // borrow is set exactly when a < r, in which case a is kept
    let mask = 0u64.wrapping_sub(borrow);
    select(mask, a, &d)
}

/// Modular addition; r < 2^255, so the sum of two reduced values never overflows 256 bits.
#[inline(always)]
const fn add_mod(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (s0, carry) = adc(a[0], b[0], 0);
    let (s1, carry) = adc(a[1], b[1], carry);
    let (s2, carry) = adc(a[2], b[2], carry);
    let (s3, _) = adc(a[3], b[3], carry);
    reduce_once(&[s0, s1, s2, s3])
}

/// Modular subtraction.
#[inline(always)]
const fn sub_mod(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let (d, borrow) = sub_inner(a, b);
    let mask = 0u64.wrapping_sub(borrow);
    let (r0, carry) = adc(d[0], M[0] & mask, 0);
    let (r1, carry) = adc(d[1], M[1] & mask, carry);
    let (r2, carry) = adc(d[2], M[2] & mask, carry);
    let (r3, _) = adc(d[3], M[3] & mask, carry);
    [r0, r1, r2, r3]
}

/// Montgomery multiplication (coarsely integrated operand scanning); computes a * b / 2^256
/// mod r.
///
/// `b` must be smaller than r; `a` may be any 256-bit value, which lets the same routine reduce
/// arbitrary limbs when converting into Montgomery form.
#[inline(always)]
const fn mont_mul(a: &[u64; 4], b: &[u64; 4]) -> [u64; 4] {
    let mut t = [0u64; 6];
    let mut i = 0;
    while i < 4 {
        // t += a * b[i]
        let mut carry = 0;
        let mut j = 0;
        while j < 4 {
            let (lo, hi) = mac(t[j], a[j], b[i], carry);
            t[j] = lo;
            carry = hi;
            j += 1;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[4] = lo;
        t[5] = hi;

        // t = (t + k * r) / 2^64, where k is chosen so that the lowest limb becomes zero
        let k = t[0].wrapping_mul(U);
        let (_, mut carry) = mac(t[0], k, M[0], 0);
        j = 1;
        while j < 4 {
            let (lo, hi) = mac(t[j], k, M[j], carry);
            t[j - 1] = lo;
            carry = hi;
            j += 1;
        }
        let (lo, hi) = adc(t[4], carry, 0);
        t[3] = lo;
        t[4] = t[5] + hi;
        t[5] = 0;
        i += 1;
    }

    // the result is smaller than 2r < 2^256 here, so t[4] is always zero
    reduce_once(&[t[0], t[1], t[2], t[3]])
}

/// Converts a value in Montgomery form into canonical form, i.e. computes x / 2^256 mod r.
#[inline(always)]
const fn mont_to_int(x: &[u64; 4]) -> [u64; 4] {
    mont_mul(x, &[1, 0, 0, 0])
}

/// Test of equality between two field elements; return value is 0xFFFFFFFFFFFFFFFF if the two
/// values are equal, or 0 otherwise.
#[inline(always)]
fn equals(lhs: &[u64; 4], rhs: &[u64; 4]) -> u64 {
    let t = (lhs[0] ^ rhs[0]) | (lhs[1] ^ rhs[1]) | (lhs[2] ^ rhs[2]) | (lhs[3] ^ rhs[3]);
    !((((t | t.wrapping_neg()) as i64) >> 63) as u64)
}
