// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use alloc::vec::Vec;

use proptest::prelude::{any, proptest};

use super::{
    ByteReader, ByteWriter, Deserializable, DeserializationError, Randomizable, Serializable,
    SliceReader,
};

// SLICE READER TESTS
// ================================================================================================

#[test]
fn read_u8() {
    let source = [1u8, 3, 5, 7];
    let mut a = SliceReader::new(&source);

    assert_eq!(1, a.read_u8().unwrap());
    assert_eq!(3, a.read_u8().unwrap());
    assert_eq!(5, a.read_u8().unwrap());
    assert_eq!(7, a.read_u8().unwrap());
    assert!(!a.has_more_bytes());
    assert_eq!(Err(DeserializationError::UnexpectedEOF), a.read_u8());
}

#[test]
fn read_u64() {
    let mut source = 12345678910u64.to_le_bytes().to_vec();
    source.extend_from_slice(&234567891011u64.to_le_bytes());
    let mut a = SliceReader::new(&source);

    assert_eq!(12345678910, a.read_u64().unwrap());
    assert_eq!(234567891011, a.read_u64().unwrap());
    assert!(a.read_u64().is_err());
}

#[test]
fn read_array_past_end() {
    let source = [1u8, 2, 3];
    let mut a = SliceReader::new(&source);
    assert_eq!(Err(DeserializationError::UnexpectedEOF), a.read_array::<4>());
    assert_eq!([1u8, 2, 3], a.read_array::<3>().unwrap());
}

// SERIALIZATION TESTS
// ================================================================================================

#[test]
fn write_limbs() {
    let limbs = [1u64, 2, 3, u64::MAX];
    let bytes = limbs.to_bytes();
    assert_eq!(32, bytes.len());
    assert_eq!(&1u64.to_le_bytes(), &bytes[..8]);
    assert_eq!(&u64::MAX.to_le_bytes(), &bytes[24..]);

    let mut target: Vec<u8> = Vec::new();
    target.write_many(&limbs);
    assert_eq!(bytes, target);
}

#[test]
fn read_from_bytes_rejects_trailing_data() {
    let mut bytes = 7u64.to_bytes();
    assert_eq!(Ok(7), u64::read_from_bytes(&bytes));

    bytes.push(0);
    assert_eq!(Err(DeserializationError::UnconsumedBytes), u64::read_from_bytes(&bytes));
}

#[test]
fn read_many_limbs() {
    let limbs = vec![[5u64, 6, 7, 8], [9u64, 10, 11, 12]];
    let bytes = limbs.to_bytes();
    let mut reader = SliceReader::new(&bytes);
    let result: Vec<[u64; 4]> = reader.read_many(2).unwrap();
    assert_eq!(limbs, result);
    assert!(!reader.has_more_bytes());
}

// RANDOMIZABLE TESTS
// ================================================================================================

#[test]
fn from_random_bytes_needs_enough_bytes() {
    assert_eq!(None, u64::from_random_bytes(&[1, 2, 3]));
    assert_eq!(Some(0x0807060504030201), u64::from_random_bytes(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(Some([1u8, 2]), <[u8; 2]>::from_random_bytes(&[1, 2, 3]));
}

proptest! {
    #[test]
    fn u64_roundtrip_proptest(value in any::<u64>()) {
        let bytes = value.to_bytes();
        assert_eq!(value, u64::read_from_bytes(&bytes).unwrap());
    }
}
