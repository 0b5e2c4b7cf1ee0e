// hd-signer/src/signer/address.rs
//
// EVM address: keccak256(uncompressed_pubkey[1..])[12..]

use crate::error::{CryptoError, SignerResult};
use alloy_primitives::{keccak256, Address};
use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::PublicKey;

/// EVM address derivation for secp256k1 public keys.
///
/// # Flow: Public Key (65B uncompressed) → drop 0x04 → Keccak-256 → last 20 bytes
pub struct EvmAddress;

impl EvmAddress {
    pub fn from_verifying_key(key: &VerifyingKey) -> Address {
        Self::from_public_key(&PublicKey::from(key))
    }

    pub fn from_public_key(key: &PublicKey) -> Address {
        let encoded = key.to_encoded_point(false);
        let hash = keccak256(&encoded.as_bytes()[1..]);
        Address::from_slice(&hash[12..])
    }

    /// Address of a SEC1-encoded key, compressed (33B) or uncompressed (65B).
    pub fn from_sec1_bytes(bytes: &[u8]) -> SignerResult<Address> {
        let key = PublicKey::from_sec1_bytes(bytes).map_err(|_| {
            CryptoError::InvalidPublicKey(format!(
                "{} bytes are not a valid SEC1 secp256k1 public key",
                bytes.len()
            ))
        })?;
        Ok(Self::from_public_key(&key))
    }
}
