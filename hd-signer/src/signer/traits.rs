// hd-signer/src/signer/traits.rs

// Signing capability traits
//
// A host that relays transactions only ever sees these two traits: a config
// it can validate and build, and the signer the config produces.

use crate::error::SignerResult;
use tokio_util::sync::CancellationToken;

// =============================================================================
// SIGNER
// =============================================================================

/// Signer - minimal signing capability consumed by the host
///
/// # Design Principles
/// - **Synchronous**: implementations are CPU-bound and never block on I/O
/// - **Cancellation**: the token is advisory; `None` and `Some(_)` behave the same
///   for in-memory signers
/// - **Bytes out**: results are wire-ready byte vectors so the host needs no
///   curve-specific types
pub trait Signer {
    /// Public key in its compressed wire form (33 bytes for secp256k1).
    fn get_public_key(&self, cancel: Option<&CancellationToken>) -> SignerResult<Vec<u8>>;

    /// Sign a prehashed 32-byte digest.
    ///
    /// # Returns
    /// `r || s || v` (65 bytes)
    fn sign(&self, cancel: Option<&CancellationToken>, digest: &[u8]) -> SignerResult<Vec<u8>>;
}

// =============================================================================
// CONFIG
// =============================================================================

/// Configuration that knows how to check itself and build its [`Signer`].
pub trait SignerConfig {
    type Output: Signer;

    /// Run every check `build` would, without keeping the result.
    fn validate(&self) -> SignerResult<()>;

    fn build(&self) -> SignerResult<Self::Output>;
}
