// hd-signer/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine
//
// ┌──────────────────────────────────────────────────────┐
// │  mnemonic ──► Seed (64 bytes, BIP-39)                │
// │                  │                                   │
// │                  ▼                                   │
// │  master key  HMAC-SHA512("Bitcoin seed", seed)       │
// │                  │                                   │
// │                  ▼                                   │
// │  44' ─► coin' ─► account' ─► change ─► address_index │
// │                  │                                   │
// │                  ▼                                   │
// │              PrivateKey (secp256k1)                  │
// └──────────────────────────────────────────────────────┘

pub mod secp256k1;

pub use secp256k1::Secp256k1Deriver;

use crate::crypto::mnemonic::{seed_from_mnemonic, Seed};
use crate::crypto::paths::PathLevel;
use crate::error::SignerResult;
use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::{PublicKey, SecretKey};
use zeroize::Zeroizing;

/// Length of a SEC1 compressed public key.
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

// =============================================================================
// PRIVATE KEY
// =============================================================================
/// Leaf secp256k1 private key.
///
/// Never serialized. The scalar is zeroized on drop and its bytes are only
/// handed out wrapped in [`Zeroizing`].
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    pub(crate) fn from_secret_key(secret: &SecretKey) -> Self {
        Self {
            signing_key: SigningKey::from(secret),
        }
    }

    /// Import a raw 32-byte big-endian scalar.
    ///
    /// Fails if the scalar is zero or not below the curve order.
    pub fn from_bytes(bytes: &[u8; 32]) -> SignerResult<Self> {
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| {
            crate::error::CryptoError::DerivationFailed(
                "private key is not a valid secp256k1 scalar".to_string(),
            )
        })?;
        Ok(Self { signing_key })
    }

    /// Big-endian scalar `D`.
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.signing_key.to_bytes().into())
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// SEC1 compressed point: `0x02`/`0x03` prefix followed by X.
    pub fn public_key_compressed(&self) -> [u8; COMPRESSED_PUBLIC_KEY_LEN] {
        let point = PublicKey::from(self.verifying_key()).to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_PUBLIC_KEY_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &hex::encode(self.public_key_compressed()))
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// DERIVER
// =============================================================================
/// Entry point for mnemonic + path → key derivation.
pub struct KeyDeriver;

impl KeyDeriver {
    /// Derive the leaf key for an already parsed path.
    ///
    /// The path is not validated here; see [`PathLevel::validate`].
    #[inline]
    pub fn derive_private_key(seed: &Seed, path: &PathLevel) -> SignerResult<PrivateKey> {
        Secp256k1Deriver::derive(seed, path)
    }

    /// parse → validate → seed → derive.
    ///
    /// The first failing step's error is returned unchanged.
    ///
    /// # Arguments
    /// * `mnemonic` - BIP-39 English phrase
    /// * `path` - e.g. `"m/44'/60'/0'/0/0"`
    pub fn derive_from_mnemonic_and_path(mnemonic: &str, path: &str) -> SignerResult<PrivateKey> {
        let level = PathLevel::parse(path)?;
        level.validate()?;

        let seed = seed_from_mnemonic(mnemonic)?;
        Self::derive_private_key(&seed, &level)
    }
}

// =============================================================================
// TESTS
// =============================================================================
