// hd-signer/src/lib.rs

//! Deterministic secp256k1 signer backed by a BIP-39 mnemonic and a BIP-44 path.
//!
//! The mnemonic plus path is the long-term secret; the private key is
//! rederived in memory when a signer is built and never persisted.
//!
//! ```no_run
//! use hd_signer::{HdSigner, Signer};
//!
//! let signer = HdSigner::new(
//!     "math razor capable expose worth grape metal sunset metal sudden usage scheme",
//!     "m/44'/60'/0'/0/0",
//! )?;
//! let public_key = signer.get_public_key(None)?;
//! let signature = signer.sign(None, &[0u8; 32])?;
//! assert_eq!(public_key.len(), 33);
//! assert_eq!(signature.len(), 65);
//! # Ok::<(), hd_signer::SignerError>(())
//! ```
//!
//! The crate emits `tracing` events but never installs a subscriber.

pub mod config;
pub mod crypto;
pub mod error;
pub mod signer;

pub use config::HdSignerConfig;
pub use crypto::{KeyDeriver, PathLevel, PrivateKey};
pub use error::{CryptoError, MnemonicError, PathError, SignerError, SignerResult};
pub use signer::{
    EvmAddress, HdSigner, RecoverableSignature, Signer, SignerConfig, SignerFactory, DIGEST_LEN,
};
