// hd-signer/src/signer/signature.rs
//
// Recoverable secp256k1 signature: r (32) || s (32) || v (1)

use crate::error::{CryptoError, SignerResult};
use crate::signer::address::EvmAddress;
use alloy_primitives::Address;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use k256::FieldBytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a prehashed message digest.
pub const DIGEST_LEN: usize = 32;

/// ECDSA signature with its recovery id.
///
/// `s` is always in the lower half of the curve order and `v` is the raw
/// recovery id (0 or 1), not the 27/28 legacy Ethereum form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoverableSignature {
    #[serde(with = "hex_bytes")]
    r: [u8; 32],
    #[serde(with = "hex_bytes")]
    s: [u8; 32],
    v: u8,
}

mod hex_bytes {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(bytes)))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let s = s.strip_prefix("0x").unwrap_or(&s);
        let bytes = hex::decode(s).map_err(de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| de::Error::custom("expected 32 bytes"))
    }
}

impl RecoverableSignature {
    /// Wire length: `r || s || v`.
    pub const BYTE_LEN: usize = 65;

    pub(crate) fn from_parts(signature: &Signature, recovery_id: RecoveryId) -> Self {
        let (r, s) = signature.split_bytes();
        Self {
            r: r.into(),
            s: s.into(),
            v: recovery_id.to_byte(),
        }
    }

    /// Parse the 65-byte wire form.
    ///
    /// # Errors
    /// [`CryptoError::InvalidSignature`] on a wrong length or a `v` other than 0 or 1.
    pub fn from_bytes(bytes: &[u8]) -> SignerResult<Self> {
        if bytes.len() != Self::BYTE_LEN {
            return Err(CryptoError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                Self::BYTE_LEN,
                bytes.len()
            ))
            .into());
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        let v = bytes[64];

        if v > 1 {
            return Err(
                CryptoError::InvalidSignature(format!("recovery id must be 0 or 1, got {v}")).into(),
            );
        }

        Ok(Self { r, s, v })
    }

    pub fn to_bytes(&self) -> [u8; Self::BYTE_LEN] {
        let mut bytes = [0u8; Self::BYTE_LEN];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..64].copy_from_slice(&self.s);
        bytes[64] = self.v;
        bytes
    }

    #[inline]
    pub const fn r(&self) -> &[u8; 32] {
        &self.r
    }

    #[inline]
    pub const fn s(&self) -> &[u8; 32] {
        &self.s
    }

    #[inline]
    pub const fn v(&self) -> u8 {
        self.v
    }

    /// Recover the signing key from a 32-byte digest.
    pub fn recover_verifying_key(&self, digest: &[u8]) -> SignerResult<VerifyingKey> {
        check_digest_len(digest)?;

        let signature = Signature::from_scalars(FieldBytes::from(self.r), FieldBytes::from(self.s))
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        let recovery_id = RecoveryId::from_byte(self.v).ok_or_else(|| {
            CryptoError::InvalidSignature(format!("recovery id must be 0 or 1, got {}", self.v))
        })?;

        VerifyingKey::recover_from_prehash(digest, &signature, recovery_id)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()).into())
    }

    /// Address of the key that produced this signature over `digest`.
    pub fn recover_address(&self, digest: &[u8]) -> SignerResult<Address> {
        let key = self.recover_verifying_key(digest)?;
        Ok(EvmAddress::from_verifying_key(&key))
    }
}

impl fmt::Display for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl TryFrom<&[u8]> for RecoverableSignature {
    type Error = crate::error::SignerError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// Reject anything that is not exactly a 32-byte digest.
pub(crate) fn check_digest_len(digest: &[u8]) -> SignerResult<()> {
    if digest.len() != DIGEST_LEN {
        return Err(CryptoError::InvalidDigestLength {
            expected: DIGEST_LEN,
            got: digest.len(),
        }
        .into());
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
