// hd-signer/src/crypto/mnemonic.rs
//
// BIP-39 phrase → seed (PBKDF2-HMAC-SHA512, 2048 rounds, salt "mnemonic")

use crate::error::{MnemonicError, SignerResult};
use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

/// Length of a BIP-39 seed in bytes.
pub const SEED_LEN: usize = 64;

/// 64-byte BIP-39 seed, zeroized on drop.
///
/// The seed only lives long enough to derive the master key; nothing in
/// this crate stores it.
pub struct Seed(Zeroizing<[u8; SEED_LEN]>);

impl Seed {
    /// Wrap raw seed bytes, e.g. a seed produced by another BIP-39 implementation.
    pub fn from_bytes(bytes: [u8; SEED_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Seed").field(&"[REDACTED]").finish()
    }
}

/// Stretch a BIP-39 English mnemonic into a 64-byte seed with an empty passphrase.
///
/// Runs of whitespace between words are collapsed and the phrase is
/// NFKD-normalized before the word list and checksum are checked.
///
/// # Errors
/// - [`MnemonicError::InvalidWordCount`] for anything but 12/15/18/21/24 words
/// - [`MnemonicError::UnknownWord`] with the position of the first bad word
/// - [`MnemonicError::ChecksumFailed`] when the checksum bits do not match
pub fn seed_from_mnemonic(phrase: &str) -> SignerResult<Seed> {
    let normalized = Zeroizing::new(phrase.split_whitespace().collect::<Vec<_>>().join(" "));

    let mnemonic =
        Mnemonic::parse_in(Language::English, normalized.as_str()).map_err(map_bip39_error)?;

    Ok(Seed::from_bytes(mnemonic.to_seed("")))
}

fn map_bip39_error(err: bip39::Error) -> MnemonicError {
    match err {
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(index),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        other => MnemonicError::Bip39Error(other.to_string()),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignerError;

    const TEST_MNEMONIC: &str =
        "math razor capable expose worth grape metal sunset metal sudden usage scheme";
    const TEST_SEED: &str = "5d192f43318024f6919e92a6bdf9474b34b704295abb3e21599290d7a3262b567e6c6de54545e946d54b559f06ae475e57d3964875e889a724bbe7108374965c";

    #[test]
    fn test_seed_from_mnemonic() {
        let seed = seed_from_mnemonic(TEST_MNEMONIC).unwrap();
        assert_eq!(hex::encode(seed.as_bytes()), TEST_SEED);
    }

    #[test]
    fn test_seed_bip39_vector() {
        // Trezor vector with an empty passphrase instead of "TREZOR"
        let seed = seed_from_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        )
        .unwrap();
        assert_eq!(
            hex::encode(seed.as_bytes()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    #[test]
    fn test_seed_normalizes_whitespace() {
        let messy = format!("  {}  ", TEST_MNEMONIC.replace(' ', "   "));
        let seed = seed_from_mnemonic(&messy).unwrap();
        assert_eq!(hex::encode(seed.as_bytes()), TEST_SEED);
    }

    #[test]
    fn test_invalid_word_count() {
        let err = seed_from_mnemonic("math razor capable").unwrap_err();
        assert_eq!(
            err,
            SignerError::Mnemonic(MnemonicError::InvalidWordCount(3))
        );
    }

    #[test]
    fn test_unknown_word() {
        let err = seed_from_mnemonic(
            "math razor capable expose worth grape metal sunset metal sudden usage notaword",
        )
        .unwrap_err();
        assert_eq!(err, SignerError::Mnemonic(MnemonicError::UnknownWord(11)));
    }

    #[test]
    fn test_checksum_failure() {
        let err = seed_from_mnemonic(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon",
        )
        .unwrap_err();
        assert_eq!(err, SignerError::Mnemonic(MnemonicError::ChecksumFailed));
    }

    #[test]
    fn test_debug_does_not_leak_seed() {
        let seed = seed_from_mnemonic(TEST_MNEMONIC).unwrap();
        let debug_output = format!("{:?}", seed);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("5d192f"));
    }
}
