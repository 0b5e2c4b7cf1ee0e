// hd-signer/src/signer/mod.rs

//! Signing
//!
//! - [`HdSigner`]: the key derived from a mnemonic and path, with public-key export and digest signing.
//! - [`RecoverableSignature`]: `r || s || v` wire form, with key recovery.
//! - [`Signer`] / [`SignerConfig`]: the capability traits a host programs against.

pub mod address;
pub mod hd;
pub mod signature;
pub mod traits;

pub use address::EvmAddress;
pub use hd::{HdSigner, SignerFactory};
pub use signature::{RecoverableSignature, DIGEST_LEN};
pub use traits::{Signer, SignerConfig};
