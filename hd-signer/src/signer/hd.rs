// hd-signer/src/signer/hd.rs
//
// HD Signer - one secp256k1 key derived from (mnemonic, path), held for the
// life of the process.

use crate::crypto::{KeyDeriver, PrivateKey, COMPRESSED_PUBLIC_KEY_LEN};
use crate::error::{CryptoError, SignerResult};
use crate::signer::address::EvmAddress;
use crate::signer::signature::{check_digest_len, RecoverableSignature};
use crate::signer::traits::Signer;
use alloy_primitives::Address;
use tokio_util::sync::CancellationToken;
use tracing::{info, trace, warn};

/// Constructor shape the host registers: `(mnemonic, path) → signer`.
pub type SignerFactory = fn(&str, &str) -> SignerResult<HdSigner>;

/// HD Signer
///
/// # Security
/// - Only the leaf [`PrivateKey`] is kept; phrase, seed and chain codes are
///   dropped (and zeroized) before `new` returns
/// - **No Debug Leak**: `Debug` shows the address and public key only
///
/// # Concurrency
/// Immutable after construction, so `&HdSigner` can be shared across threads
/// (e.g. behind an `Arc`) without locking.
#[derive(Clone)]
pub struct HdSigner {
    key: PrivateKey,
    public_key: [u8; COMPRESSED_PUBLIC_KEY_LEN],
    address: Address,
}

impl std::fmt::Debug for HdSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdSigner")
            .field("address", &self.address)
            .field("public_key", &hex::encode(self.public_key))
            .finish_non_exhaustive()
    }
}

// Compile-time check that HdSigner satisfies the host capability.
const _: () = {
    const fn assert_signer<T: Signer + Send + Sync>() {}
    assert_signer::<HdSigner>();
};

impl HdSigner {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Derive the key for `path` from `mnemonic` and wrap it.
    ///
    /// # Arguments
    /// * `mnemonic` - BIP-39 English phrase
    /// * `path` - `m/44'/<coin>'/<account>'/<change>/<index>`
    ///
    /// # Errors
    /// The first failure of parse → validate → seed → derive, unchanged. The
    /// `SignerError` variant names the failing step (`Path`, `Mnemonic`,
    /// `Crypto`); the `warn!` event emitted here adds the path being built.
    /// Mnemonic errors carry word positions only, never words.
    pub fn new(mnemonic: &str, path: &str) -> SignerResult<Self> {
        match KeyDeriver::derive_from_mnemonic_and_path(mnemonic, path) {
            Ok(key) => {
                let signer = Self::from_private_key(key);
                info!(
                    path,
                    address = %signer.address,
                    public_key = %hex::encode(signer.public_key),
                    "HD signer ready"
                );
                Ok(signer)
            }
            Err(e) => {
                warn!(path, error = %e, "failed to build HD signer");
                Err(e)
            }
        }
    }

    /// Wrap an already derived key.
    pub fn from_private_key(key: PrivateKey) -> Self {
        let public_key = key.public_key_compressed();
        let address = EvmAddress::from_verifying_key(key.verifying_key());
        Self {
            key,
            public_key,
            address,
        }
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// SEC1 compressed public key.
    #[inline]
    pub fn public_key(&self) -> [u8; COMPRESSED_PUBLIC_KEY_LEN] {
        self.public_key
    }

    #[inline]
    pub fn address(&self) -> Address {
        self.address
    }

    // =========================================================================
    // SIGNING
    // =========================================================================

    /// Sign a 32-byte digest as-is (no hashing).
    ///
    /// RFC 6979 deterministic nonce, low-S; `v` follows the normalized `s`.
    ///
    /// # Errors
    /// - [`CryptoError::InvalidDigestLength`] unless `digest` is 32 bytes
    /// - [`CryptoError::SigningFailed`] on an internal curve failure
    pub fn sign_digest(&self, digest: &[u8]) -> SignerResult<RecoverableSignature> {
        check_digest_len(digest)?;

        let (signature, recovery_id) = self
            .key
            .signing_key()
            .sign_prehash_recoverable(digest)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;

        Ok(RecoverableSignature::from_parts(&signature, recovery_id))
    }

    /// `true` if `signature` over `digest` recovers to this signer's key.
    pub fn verify_digest(&self, digest: &[u8], signature: &RecoverableSignature) -> bool {
        signature
            .recover_verifying_key(digest)
            .map(|key| &key == self.key.verifying_key())
            .unwrap_or(false)
    }
}

impl Signer for HdSigner {
    fn get_public_key(&self, _cancel: Option<&CancellationToken>) -> SignerResult<Vec<u8>> {
        Ok(self.public_key.to_vec())
    }

    fn sign(&self, cancel: Option<&CancellationToken>, digest: &[u8]) -> SignerResult<Vec<u8>> {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            trace!("cancellation requested, in-memory signing completes anyway");
        }
        Ok(self.sign_digest(digest)?.to_bytes().to_vec())
    }
}

// =============================================================================
// TESTS
// =============================================================================
