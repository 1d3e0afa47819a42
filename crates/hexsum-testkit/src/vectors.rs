//! Golden test vectors for checksummed hex encoding.
//!
//! Every implementation of the codec must map each `source_hex` to exactly
//! `checksummed`. The casing of `source_hex` is irrelevant; only its bytes
//! matter.

use hexsum_core::encode_hex;

/// A golden encoding vector.
#[derive(Debug, Clone, Copy)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Source bytes as hex, any casing.
    pub source_hex: &'static str,
    /// Expected canonical encoding.
    pub checksummed: &'static str,
}

impl GoldenVector {
    /// Source bytes of the vector.
    pub fn bytes(&self) -> Vec<u8> {
        // Vectors are static and always valid hex.
        hex::decode(self.source_hex).unwrap_or_default()
    }
}

/// A string whose casing is one flip away from canonical.
#[derive(Debug, Clone, Copy)]
pub struct MismatchVector {
    pub name: &'static str,
    /// Input to decode.
    pub input: &'static str,
    /// Bytes the input must still decode to.
    pub source_hex: &'static str,
    /// Canonical form reported in the mismatch.
    pub canonical: &'static str,
}

/// First letter lower-cased from the canonical form.
pub const BAD_CHECKSUM_VECTOR: MismatchVector = MismatchVector {
    name: "first letter flipped",
    input: "0xd1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    source_hex: "D1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    canonical: "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
};

/// Inputs that must fail as malformed hex.
pub const MALFORMED_INPUTS: &[&str] = &["0", "0x0", "0xzz", "0X12", " 0x12", "0x12 "];

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty",
            source_hex: "",
            checksummed: "0x",
        },
        GoldenVector {
            name: "address 5aAeb605",
            source_hex: "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            checksummed: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        },
        GoldenVector {
            name: "address 19ef9290 from lowercase",
            source_hex: "19ef9290b8cf5ec5e72f9fde3e044b37736ec0c7",
            checksummed: "0x19ef9290B8cf5EC5e72F9fDE3E044b37736Ec0C7",
        },
        GoldenVector {
            name: "address dbF03B40",
            source_hex: "dbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            checksummed: "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        },
        GoldenVector {
            name: "address D1220A0c",
            source_hex: "D1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
            checksummed: "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        },
        GoldenVector {
            name: "address fB691609",
            source_hex: "fb6916095ca1df60bb79ce92ce3ea74c37c5d359",
            checksummed: "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        },
        GoldenVector {
            name: "address 9AfEaC20",
            source_hex: "9afeac202c837df470b5a145e0efd6a574b21029",
            checksummed: "0x9AfEaC202C837df470b5A145e0EfD6a574B21029",
        },
        GoldenVector {
            name: "canonical all upper",
            source_hex: "52908400098527886e0f7030069857d2e4169ee7",
            checksummed: "0x52908400098527886E0F7030069857D2E4169EE7",
        },
        GoldenVector {
            name: "canonical all lower",
            source_hex: "de709f2102306220921060314715629080e2fb77",
            checksummed: "0xde709f2102306220921060314715629080e2fb77",
        },
        GoldenVector {
            name: "40 bytes, digest wraps",
            source_hex: "5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed19ef9290b8cf5ec5e72f9fde3e044b37736ec0c7",
            checksummed: "0x5AaEB6053f3E94C9b9A09f33669435e7Ef1BeaEd19eF9290B8Cf5EC5E72F9Fde3E044b37736EC0C7",
        },
    ]
}

/// Encode every vector and compare against its expected output.
///
/// Returns `(name, matches, actual)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = encode_hex(&v.bytes());
            (v.name.to_string(), actual == v.checksummed, actual)
        })
        .collect()
}
