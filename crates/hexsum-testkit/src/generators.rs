//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hexsum_core::{encode_hex, Address, ADDRESS_SIZE, HEX_PREFIX};
use hexsum_signature::KeyPair;

/// Generate byte sequences up to the given length, including empty.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a random Address.
pub fn address() -> impl Strategy<Value = Address> {
    any::<[u8; ADDRESS_SIZE]>().prop_map(Address::from_bytes)
}

/// Generate a random keypair, skipping seeds that are not valid scalars.
pub fn key_pair() -> impl Strategy<Value = KeyPair> {
    any::<[u8; 32]>().prop_filter_map("seed outside the curve order", |seed| {
        KeyPair::from_private_key(&seed).ok()
    })
}

/// Generate bytes together with their canonical encoding.
pub fn canonical_encoding(max_len: usize) -> impl Strategy<Value = (Vec<u8>, String)> {
    bytes(max_len).prop_map(|data| {
        let encoded = encode_hex(&data);
        (data, encoded)
    })
}

/// Generate bytes with an encoding that has one letter's case flipped and is
/// still mixed-case, so it must decode with a checksum mismatch.
pub fn mismatched_encoding(max_len: usize) -> impl Strategy<Value = (Vec<u8>, String)> {
    (canonical_encoding(max_len), any::<usize>()).prop_filter_map(
        "no letter flip keeps the casing mixed",
        |((data, encoded), pick)| {
            flip_letter_keeping_mixed_case(&encoded, pick).map(|flipped| (data, flipped))
        },
    )
}

/// Flip the case of one letter of a `0x`-prefixed encoding.
///
/// `pick` selects among the letters, wrapping around. Returns `None` when the
/// body has no letters or the flip leaves it uniformly cased.
pub fn flip_letter_keeping_mixed_case(encoded: &str, pick: usize) -> Option<String> {
    let body = encoded.strip_prefix(HEX_PREFIX)?;
    let letters: Vec<usize> = body
        .char_indices()
        .filter(|(_, c)| c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .collect();
    if letters.is_empty() {
        return None;
    }

    let mut flipped = body.as_bytes().to_vec();
    let pos = letters[pick % letters.len()];
    flipped[pos] ^= 0x20;

    let has_lower = flipped.iter().any(u8::is_ascii_lowercase);
    let has_upper = flipped.iter().any(u8::is_ascii_uppercase);
    if !(has_lower && has_upper) {
        return None;
    }

    let flipped = String::from_utf8(flipped).ok()?;
    Some(format!("{}{}", HEX_PREFIX, flipped))
}
