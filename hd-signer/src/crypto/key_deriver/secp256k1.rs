// hd-signer/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation - BIP-32 / BIP-44
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use super::PrivateKey;
use crate::crypto::mnemonic::Seed;
use crate::crypto::paths::{PathLevel, HARDENED_OFFSET};
use crate::error::{CryptoError, SignerResult};
use hmac::{Hmac, Mac};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, NonZeroScalar, Scalar, SecretKey};
use sha2::Sha512;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

type HmacSha512 = Hmac<Sha512>;

/// (private scalar, chain code) pair at one node of the tree.
///
/// `SecretKey` zeroizes itself on drop; the chain code is wrapped likewise.
struct ExtendedKey {
    key: SecretKey,
    chain_code: Zeroizing<[u8; 32]>,
}

/// secp256k1 Key Deriver - BIP-32 Standard
///
/// # Security
/// - Scalars and chain codes are zeroized as soon as the next level replaces them
/// - Only the leaf scalar leaves this module, wrapped in [`PrivateKey`]
/// - A degenerate tweak (`IL == 0` or `IL >= n`) or a zero child scalar is reported, never skipped
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// BIP-32 master key HMAC key
    const MASTER_SECRET: &'static [u8] = b"Bitcoin seed";

    /// Derive the leaf key of a BIP-44 path.
    ///
    /// The first three levels are derived hardened, `change` and
    /// `address_index` normally.
    pub fn derive(seed: &Seed, path: &PathLevel) -> SignerResult<PrivateKey> {
        let key = Self::derive_path(seed.as_bytes(), &path.indices())?;
        debug!(path = %path, "derived leaf key");
        Ok(key)
    }

    /// Walk an arbitrary list of child indices from the master key.
    ///
    /// An index with the top bit set (`>= 0x8000_0000`) is derived hardened.
    ///
    /// # Arguments
    /// * `seed` - BIP-39 seed; any length is hashed as-is (BIP-32 recommends 16 to 64 bytes)
    /// * `indices` - Child numbers, hardened bit already applied
    pub fn derive_path(seed: &[u8], indices: &[u32]) -> SignerResult<PrivateKey> {
        let mut node = Self::master_key(seed)?;

        for (depth, &index) in indices.iter().enumerate() {
            node = Self::child_key(&node, index, depth + 1)?;
        }

        Ok(PrivateKey::from_secret_key(&node.key))
    }

    /// I = HMAC-SHA512(Key = "Bitcoin seed", Data = seed)
    /// IL = master scalar, IR = master chain code
    fn master_key(seed: &[u8]) -> SignerResult<ExtendedKey> {
        let mut mac = Self::hmac(Self::MASTER_SECRET)?;
        mac.update(seed);
        let (il, chain_code) = split_output(mac);

        let key = parse_scalar(&il)
            .and_then(non_zero)
            .ok_or_else(|| {
                CryptoError::DerivationFailed(
                    "master key is not a valid secp256k1 scalar".to_string(),
                )
            })?;

        Ok(ExtendedKey {
            key: SecretKey::from(key),
            chain_code,
        })
    }

    /// CKDpriv
    ///
    /// Hardened: Data = 0x00 || ser256(k_par) || ser32(i)
    /// Normal:   Data = serP(point(k_par)) || ser32(i)
    /// I = HMAC-SHA512(Key = c_par, Data), k_i = IL + k_par (mod n), c_i = IR
    fn child_key(parent: &ExtendedKey, index: u32, depth: usize) -> SignerResult<ExtendedKey> {
        let mut mac = Self::hmac(parent.chain_code.as_slice())?;

        if index >= HARDENED_OFFSET {
            let mut parent_bytes: [u8; 32] = parent.key.to_bytes().into();
            mac.update(&[0x00]);
            mac.update(&parent_bytes);
            parent_bytes.zeroize();
        } else {
            let point = parent.key.public_key().to_encoded_point(true);
            mac.update(point.as_bytes());
        }
        mac.update(&index.to_be_bytes());

        let (il, chain_code) = split_output(mac);

        let child = apply_tweak(&il, &parent.key.to_nonzero_scalar()).map_err(|reason| {
            CryptoError::DerivationFailed(format!(
                "child {index:#010x} at depth {depth}: {reason}"
            ))
        })?;

        Ok(ExtendedKey {
            key: SecretKey::from(child),
            chain_code,
        })
    }

    fn hmac(key: &[u8]) -> SignerResult<HmacSha512> {
        HmacSha512::new_from_slice(key).map_err(|e| {
            CryptoError::DerivationFailed(format!("HMAC init failed: {}", e)).into()
        })
    }
}

/// Finalize the HMAC and split it into (IL, IR).
fn split_output(mac: HmacSha512) -> (Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>) {
    let mut buf = Zeroizing::new([0u8; 64]);
    buf.copy_from_slice(&mac.finalize().into_bytes());

    let mut il = Zeroizing::new([0u8; 32]);
    let mut ir = Zeroizing::new([0u8; 32]);
    il.copy_from_slice(&buf[..32]);
    ir.copy_from_slice(&buf[32..]);
    (il, ir)
}

/// parse256(IL), rejecting values >= n.
fn parse_scalar(bytes: &[u8; 32]) -> Option<Scalar> {
    Option::from(Scalar::from_repr(FieldBytes::from(*bytes)))
}

fn non_zero(scalar: Scalar) -> Option<NonZeroScalar> {
    Option::from(NonZeroScalar::new(scalar))
}

/// k_i = parse256(IL) + k_par (mod n).
///
/// Rejects a tweak that is zero or not below n, and a zero child.
fn apply_tweak(il: &[u8; 32], parent: &NonZeroScalar) -> Result<NonZeroScalar, &'static str> {
    let tweak = parse_scalar(il).ok_or("tweak is not below the curve order")?;
    let tweak = non_zero(tweak).ok_or("tweak is zero")?;
    non_zero(*tweak + **parent).ok_or("child is the zero scalar")
}

// =============================================================================
// TESTS
// =============================================================================
