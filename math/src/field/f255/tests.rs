// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use num_bigint::BigUint;
use proptest::prelude::*;
use rand_utils::{rand_value, rand_vector};

use super::{
    BaseElement, Deserializable, DeserializationError, FieldElement, Serializable, StarkField, M,
    U256,
};

// MANUAL TESTS
// ================================================================================================

#[test]
fn add() {
    // identity
    let r: BaseElement = rand_value();
    assert_eq!(r, r + BaseElement::ZERO);

    // test addition within bounds
    assert_eq!(BaseElement::new(5), BaseElement::new(2) + BaseElement::new(3));

    // test overflow
    let t = BaseElement::from_u64s(m_minus(1));
    assert_eq!(BaseElement::ZERO, t + BaseElement::ONE);
    assert_eq!(BaseElement::ONE, t + BaseElement::new(2));
}

#[test]
fn sub() {
    // identity
    let r: BaseElement = rand_value();
    assert_eq!(r, r - BaseElement::ZERO);

    // test subtraction within bounds
    assert_eq!(BaseElement::new(2), BaseElement::new(5) - BaseElement::new(3));

    // test underflow
    let expected = BaseElement::from_u64s(m_minus(2));
    assert_eq!(expected, BaseElement::new(3) - BaseElement::new(5));
}

#[test]
fn neg() {
    assert_eq!(BaseElement::ZERO, -BaseElement::ZERO);
    assert_eq!(BaseElement::from_u64s(m_minus(1)), -BaseElement::ONE);

    let r: BaseElement = rand_value();
    assert_eq!(r, -(-r));
    assert_eq!(BaseElement::ZERO, r + (-r));
}

#[test]
fn mul() {
    // identity
    let r: BaseElement = rand_value();
    assert_eq!(BaseElement::ZERO, r * BaseElement::ZERO);
    assert_eq!(r, r * BaseElement::ONE);

    // test multiplication within bounds
    assert_eq!(BaseElement::from(15u8), BaseElement::from(5u8) * BaseElement::from(3u8));

    // test overflow
    let t = BaseElement::from_u64s(m_minus(1));
    assert_eq!(BaseElement::ONE, t * t);
    assert_eq!(BaseElement::from_u64s(m_minus(2)), t * BaseElement::from(2u8));
    assert_eq!(BaseElement::from_u64s(m_minus(4)), t * BaseElement::from(4u8));

    // (r + 1) / 2 is the inverse of two
    let half = BaseElement::from(2u8).inv();
    assert_eq!(BaseElement::ONE, half * BaseElement::from(2u8));
    assert_eq!(
        [0x7fffffff80000001, 0xa9ded2017fff2dff, 0x199cec0404d0ec02, 0x39f6d3a994cebea4],
        half.as_limbs()
    );
}

#[test]
fn exp() {
    let a = BaseElement::ZERO;
    assert_eq!(a.exp(U256::from(0u32)), BaseElement::ONE);
    assert_eq!(a.exp(U256::from(1u32)), BaseElement::ZERO);

    let a = BaseElement::ONE;
    assert_eq!(a.exp(U256::from(0u32)), BaseElement::ONE);
    assert_eq!(a.exp(U256::from(3u32)), BaseElement::ONE);

    let a: BaseElement = rand_value();
    assert_eq!(a.exp(U256::from(3u32)), a * a * a);

    // Fermat's little theorem
    assert_eq!(a.exp(U256::from(m_minus(1))), BaseElement::ONE);
}

#[test]
fn inv() {
    // identity
    assert_eq!(BaseElement::ONE, BaseElement::inv(BaseElement::ONE));
    assert_eq!(BaseElement::ZERO, BaseElement::inv(BaseElement::ZERO));

    let x: BaseElement = rand_value();
    assert_eq!(BaseElement::ONE, x * x.inv());
    assert_eq!(x, BaseElement::ONE / x.inv());
}

#[test]
fn element_as_int() {
    let v = u64::MAX;
    let e = BaseElement::new(v);
    assert_eq!(U256::from(v), e.as_int());

    let limbs = m_minus(1);
    assert_eq!(limbs, BaseElement::from_u64s(limbs).as_limbs());

    // values above the modulus are reduced
    assert_eq!([5, 0, 0, 0], BaseElement::from_u64s(m_plus(5)).as_limbs());
}

#[test]
fn equals() {
    let a = BaseElement::ONE;
    let b = BaseElement::new(M[0] - 1) * BaseElement::new(M[0] - 1).inv();

    // elements are equal
    assert_eq!(a, b);
    assert_eq!(a.as_limbs(), b.as_limbs());
    assert_ne!(a, BaseElement::ZERO);
}

#[test]
fn display() {
    assert_eq!(
        "0x0000000000000000000000000000000000000000000000000000000000000007",
        format!("{}", BaseElement::GENERATOR)
    );
    assert_eq!(
        "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001",
        format!("{:?}", BaseElement::MODULUS)
    );
}

// ROOTS OF UNITY
// ------------------------------------------------------------------------------------------------

#[test]
fn get_root_of_unity() {
    let root_32 = BaseElement::get_root_of_unity(32);
    assert_eq!(BaseElement::TWO_ADIC_ROOT_OF_UNITY, root_32);
    assert_eq!(BaseElement::ONE, root_32.exp(U256::from(1u64 << 32)));
    assert_ne!(BaseElement::ONE, root_32.exp(U256::from(1u64 << 31)));

    let root_31 = BaseElement::get_root_of_unity(31);
    let expected = root_32.exp(U256::from(2u32));
    assert_eq!(expected, root_31);
    assert_eq!(BaseElement::ONE, root_31.exp(U256::from(1u64 << 31)));
    assert_ne!(BaseElement::ONE, root_31.exp(U256::from(1u64 << 30)));

    // the order 2 root of unity is -1
    assert_eq!(-BaseElement::ONE, BaseElement::get_root_of_unity(1));

    // root of unity of order 16 selected by the generator 7
    assert_eq!(
        [0x53ea61d87742bcce, 0x17beb312f20b6f76, 0xdd1c0af834cec32c, 0x20b1ce9140267af9],
        BaseElement::get_root_of_unity(4).as_limbs()
    );
}

#[test]
fn two_adic_root_is_generator_power() {
    // k = (r - 1) / 2^32
    let k = (modulus() - 1u32) >> 32;
    let expected = BaseElement::GENERATOR.exp(to_u256(&k));
    assert_eq!(expected, BaseElement::TWO_ADIC_ROOT_OF_UNITY);
}

#[test]
#[should_panic(expected = "order cannot exceed 2^32")]
fn get_root_of_unity_too_large() {
    let _ = BaseElement::get_root_of_unity(33);
}

// SERIALIZATION AND DESERIALIZATION
// ------------------------------------------------------------------------------------------------

#[test]
fn elements_to_bytes() {
    let source = vec![BaseElement::new(1), BaseElement::new(2), BaseElement::new(3)];

    let mut expected = vec![0u8; 96];
    expected[0] = 1;
    expected[32] = 2;
    expected[64] = 3;

    assert_eq!(expected, source.to_bytes());
    assert_eq!(32, BaseElement::new(1).get_size_hint());
}

#[test]
fn read_elements_from_bytes() {
    let source: Vec<BaseElement> = rand_vector(8);
    let bytes = source.to_bytes();

    let mut reader = utils::SliceReader::new(&bytes);
    let result: Vec<BaseElement> = BaseElement::read_batch_from(&mut reader, 8).unwrap();
    assert_eq!(source, result);
}

#[test]
fn try_from_bytes() {
    let e: BaseElement = rand_value();
    let bytes = e.to_bytes();
    assert_eq!(Ok(e), BaseElement::try_from(bytes.as_slice()));

    // wrong length
    assert!(matches!(
        BaseElement::try_from(&bytes[..31]),
        Err(DeserializationError::InvalidValue(_))
    ));

    // modulus is not a valid element
    let modulus_bytes = BaseElement::get_modulus_le_bytes();
    assert!(matches!(
        BaseElement::try_from(modulus_bytes.as_slice()),
        Err(DeserializationError::InvalidValue(_))
    ));
    assert!(BaseElement::read_from_bytes(&modulus_bytes).is_err());

    // truncated input
    assert_eq!(
        Err(DeserializationError::UnexpectedEOF),
        BaseElement::read_from_bytes(&bytes[..20])
    );
}

#[test]
fn try_from_limbs() {
    assert!(BaseElement::try_from(M).is_err());
    assert!(BaseElement::try_from([u64::MAX; 4]).is_err());

    let limbs = m_minus(1);
    assert_eq!(Ok(BaseElement::from_u64s(limbs)), BaseElement::try_from(limbs));
    assert_eq!(limbs, <[u64; 4]>::from(BaseElement::from_u64s(limbs)));
}

#[test]
fn random_elements_are_canonical() {
    let values: Vec<BaseElement> = rand_vector(64);
    for value in values {
        assert!(value.as_int() < BaseElement::MODULUS);
    }

    // the top bit of the candidate is ignored, values at or above the modulus are rejected
    assert_eq!(None, <BaseElement as utils::Randomizable>::from_random_bytes(&[0xff; 32]));
    let mut bytes = [0u8; 32];
    bytes[31] = 0x80;
    bytes[0] = 9;
    assert_eq!(
        Some(BaseElement::new(9)),
        <BaseElement as utils::Randomizable>::from_random_bytes(&bytes)
    );
}

// RANDOMIZED TESTS
// ================================================================================================

proptest! {

    #[test]
    fn add_proptest(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
        let v1 = BaseElement::from_u64s(a);
        let v2 = BaseElement::from_u64s(b);
        let result = v1 + v2;

        let expected = (to_big(&a) + to_big(&b)) % modulus();
        prop_assert_eq!(expected, to_big(&result.as_limbs()));
    }

    #[test]
    fn sub_proptest(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
        let v1 = BaseElement::from_u64s(a);
        let v2 = BaseElement::from_u64s(b);
        let result = v1 - v2;

        let a = to_big(&a) % modulus();
        let b = to_big(&b) % modulus();
        let expected = (a + modulus() - b) % modulus();
        prop_assert_eq!(expected, to_big(&result.as_limbs()));
    }

    #[test]
    fn neg_proptest(a in any::<[u64; 4]>()) {
        let v = BaseElement::from_u64s(a);
        let expected = (modulus() - to_big(&a) % modulus()) % modulus();

        prop_assert_eq!(expected, to_big(&(-v).as_limbs()));
    }

    #[test]
    fn mul_proptest(a in any::<[u64; 4]>(), b in any::<[u64; 4]>()) {
        let v1 = BaseElement::from_u64s(a);
        let v2 = BaseElement::from_u64s(b);
        let result = v1 * v2;

        let expected = (to_big(&a) * to_big(&b)) % modulus();
        prop_assert_eq!(expected, to_big(&result.as_limbs()));
    }

    #[test]
    fn double_proptest(a in any::<[u64; 4]>()) {
        let v = BaseElement::from_u64s(a);
        prop_assert_eq!(v + v, v.double());
    }

    #[test]
    fn exp_proptest(a in any::<[u64; 4]>(), b in any::<u64>()) {
        let result = BaseElement::from_u64s(a).exp(U256::from(b));

        let expected = to_big(&a).modpow(&BigUint::from(b), &modulus());
        prop_assert_eq!(expected, to_big(&result.as_limbs()));
    }

    #[test]
    fn inv_proptest(a in any::<[u64; 4]>()) {
        let a = BaseElement::from_u64s(a);
        let b = a.inv();

        let expected = if a == BaseElement::ZERO { BaseElement::ZERO } else { BaseElement::ONE };
        prop_assert_eq!(expected, a * b);
    }

    #[test]
    fn element_roundtrip_proptest(a in any::<[u64; 4]>()) {
        let e = BaseElement::from_u64s(a);
        let bytes = e.to_bytes();
        prop_assert_eq!(e, BaseElement::read_from_bytes(&bytes).unwrap());
        prop_assert_eq!(to_big(&a) % modulus(), BigUint::from_bytes_le(&bytes));
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn modulus() -> BigUint {
    BigUint::from_bytes_le(&BaseElement::get_modulus_le_bytes())
}

fn to_big(limbs: &[u64; 4]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

fn to_u256(value: &BigUint) -> U256 {
    let mut limbs = [0u64; 4];
    for (limb, digit) in limbs.iter_mut().zip(value.iter_u64_digits()) {
        *limb = digit;
    }
    U256::from(limbs)
}

/// Returns the limbs of r - k for small k.
fn m_minus(k: u64) -> [u64; 4] {
    [M[0] - k, M[1], M[2], M[3]]
}

/// Returns the limbs of r + k for small k.
fn m_plus(k: u64) -> [u64; 4] {
    [M[0] + k, M[1], M[2], M[3]]
}
