// hd-signer/src/config.rs

//! Signer configuration
//!
//! The host decodes a `{ "mnemonic": ..., "path": ... }` object, calls
//! [`SignerConfig::validate`] while loading its own configuration, and
//! [`SignerConfig::build`] when it needs the signer.
//!
//! ```json
//! {
//!   "mnemonic": "math razor capable expose worth grape metal sunset metal sudden usage scheme",
//!   "path": "m/44'/60'/0'/0/0"
//! }
//! ```

use crate::crypto::KeyDeriver;
use crate::error::{SignerError, SignerResult};
use crate::signer::{HdSigner, SignerConfig};
use serde::{Deserialize, Serialize};
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Mnemonic + path pair that identifies one HD key.
///
/// The mnemonic is wiped from memory when the config is dropped and never
/// shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(deny_unknown_fields)]
pub struct HdSignerConfig {
    /// BIP-39 English phrase.
    pub mnemonic: String,

    /// `m/44'/<coin>'/<account>'/<change>/<index>`
    pub path: String,
}

// Compile-time check that the config satisfies the host capability.
const _: () = {
    const fn assert_config<T: SignerConfig>() {}
    assert_config::<HdSignerConfig>();
};

impl std::fmt::Debug for HdSignerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdSignerConfig")
            .field("mnemonic", &"[REDACTED]")
            .field("path", &self.path)
            .finish()
    }
}

impl HdSignerConfig {
    pub fn new(mnemonic: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            path: path.into(),
        }
    }

    /// Decode from a JSON object with exactly the `mnemonic` and `path` fields.
    pub fn from_json(json: &str) -> SignerResult<Self> {
        serde_json::from_str(json).map_err(|e| SignerError::Config(e.to_string()))
    }
}

impl SignerConfig for HdSignerConfig {
    type Output = HdSigner;

    /// Full derivation; the key is dropped straight away.
    fn validate(&self) -> SignerResult<()> {
        KeyDeriver::derive_from_mnemonic_and_path(&self.mnemonic, &self.path)
            .map(drop)
            .map_err(|e| {
                warn!(path = %self.path, error = %e, "invalid mnemonic and/or path for HD wallet");
                e
            })
    }

    fn build(&self) -> SignerResult<HdSigner> {
        HdSigner::new(&self.mnemonic, &self.path)
    }
}

// =============================================================================
// TESTS
// =============================================================================
