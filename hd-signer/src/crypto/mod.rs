// hd-signer/src/crypto/mod.rs

//! Key material
//!
//! - **Paths**: parsing and BIP-44 validation of `m/44'/c'/a'/change/index` via [`PathLevel`].
//! - **Mnemonic**: BIP-39 phrase to 64-byte seed via [`seed_from_mnemonic`].
//! - **Key Derivation**: BIP-32 secp256k1 derivation down to a [`PrivateKey`] via [`KeyDeriver`].

pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

pub use key_deriver::{KeyDeriver, PrivateKey, Secp256k1Deriver, COMPRESSED_PUBLIC_KEY_LEN};
pub use mnemonic::{seed_from_mnemonic, Seed, SEED_LEN};
pub use paths::{coin_type, PathLevel, BIP44_PURPOSE, HARDENED_OFFSET};
