//! Sign, verify and recover over secp256k1.
//!
//! Thin wrappers around k256 with byte-slice inputs. Signing is
//! deterministic (RFC 6979) and always produces low-S signatures.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};

use crate::error::SignatureError;
use crate::keys::{
    PublicKey, RecoverableSignature, HASH_SIZE, PRIVATE_KEY_SIZE, SIGNATURE_SIZE,
};

/// Length of the `r || s` part of a signature.
const COMPACT_SIZE: usize = 64;

/// Sign a 32-byte hash with a raw private key.
pub fn sign(private_key: &[u8], hash: &[u8]) -> Result<RecoverableSignature, SignatureError> {
    let key = signing_key(private_key)?;
    sign_with_key(&key, hash)
}

/// Verify a signature over a 32-byte hash.
///
/// Accepts `r || s` or `r || s || v`; the recovery id is ignored. Any malformed
/// input verifies as `false`.
pub fn verify(public_key: &[u8], hash: &[u8], signature: &[u8]) -> bool {
    if hash.len() != HASH_SIZE {
        return false;
    }
    let compact = match signature.len() {
        COMPACT_SIZE | SIGNATURE_SIZE => &signature[..COMPACT_SIZE],
        _ => return false,
    };
    let Ok(key) = VerifyingKey::from_sec1_bytes(public_key) else {
        return false;
    };
    let Ok(sig) = Signature::from_slice(compact) else {
        return false;
    };
    key.verify_prehash(hash, &sig).is_ok()
}

/// Recover the uncompressed public key that produced a signature.
pub fn recover(hash: &[u8], signature: &[u8]) -> Result<PublicKey, SignatureError> {
    check_hash(hash)?;
    if signature.len() != SIGNATURE_SIZE {
        return Err(SignatureError::InvalidSignatureLength {
            expected: SIGNATURE_SIZE,
            got: signature.len(),
        });
    }

    let v = signature[COMPACT_SIZE];
    let recovery_id = RecoveryId::from_byte(v).ok_or(SignatureError::InvalidRecoveryId(v))?;
    let sig = Signature::from_slice(&signature[..COMPACT_SIZE])
        .map_err(|_| SignatureError::RecoveryFailed)?;

    let key = VerifyingKey::recover_from_prehash(hash, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;
    Ok(PublicKey::from_verifying_key(&key))
}

pub(crate) fn signing_key(private_key: &[u8]) -> Result<SigningKey, SignatureError> {
    // k256 pads short slices; insist on the exact size.
    if private_key.len() != PRIVATE_KEY_SIZE {
        return Err(SignatureError::InvalidPrivateKey);
    }
    SigningKey::from_slice(private_key).map_err(|_| SignatureError::InvalidPrivateKey)
}

pub(crate) fn sign_with_key(
    key: &SigningKey,
    hash: &[u8],
) -> Result<RecoverableSignature, SignatureError> {
    check_hash(hash)?;
    let (sig, recovery_id) = key
        .sign_prehash_recoverable(hash)
        .map_err(|_| SignatureError::SigningFailed)?;

    let mut out = [0u8; SIGNATURE_SIZE];
    out[..COMPACT_SIZE].copy_from_slice(&sig.to_bytes());
    out[COMPACT_SIZE] = recovery_id.to_byte();
    Ok(RecoverableSignature(out))
}

fn check_hash(hash: &[u8]) -> Result<(), SignatureError> {
    if hash.len() != HASH_SIZE {
        return Err(SignatureError::InvalidHashLength {
            expected: HASH_SIZE,
            got: hash.len(),
        });
    }
    Ok(())
}
