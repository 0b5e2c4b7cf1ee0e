//! Property-based tests for path handling, derivation and signing
//!
//! The signer is built once; PBKDF2 on every case would dominate the run.

use hd_signer::crypto::Secp256k1Deriver;
use hd_signer::{CryptoError, HdSigner, PathLevel, RecoverableSignature, SignerError};
use proptest::prelude::*;
use std::str::FromStr;
use std::sync::OnceLock;

const TEST_MNEMONIC: &str =
    "math razor capable expose worth grape metal sunset metal sudden usage scheme";

fn signer() -> &'static HdSigner {
    static SIGNER: OnceLock<HdSigner> = OnceLock::new();
    SIGNER.get_or_init(|| HdSigner::new(TEST_MNEMONIC, "m/44'/60'/0'/0/0").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Signing the same digest twice yields the same bytes, and the result
    /// recovers to the signer's own key.
    #[test]
    fn prop_sign_deterministic_and_recoverable(digest in any::<[u8; 32]>()) {
        let first = signer().sign_digest(&digest).unwrap();
        let second = signer().sign_digest(&digest).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(first.v() <= 1);
        prop_assert!(signer().verify_digest(&digest, &first));

        let reparsed = RecoverableSignature::from_bytes(&first.to_bytes()).unwrap();
        prop_assert_eq!(reparsed.recover_address(&digest).unwrap(), signer().address());
    }

    /// Any digest that is not exactly 32 bytes is refused.
    #[test]
    fn prop_digest_length_guard(len in 0usize..128) {
        prop_assume!(len != 32);
        let err = signer().sign_digest(&vec![0xAB; len]).unwrap_err();
        prop_assert_eq!(
            err,
            SignerError::Crypto(CryptoError::InvalidDigestLength { expected: 32, got: len })
        );
    }

    /// Display output parses back to the same path.
    #[test]
    fn prop_path_display_parse(
        purpose in any::<u32>(),
        coin_type in any::<u32>(),
        account in any::<u32>(),
        change in any::<u32>(),
        address_index in any::<u32>(),
    ) {
        let level = PathLevel { purpose, coin_type, account, change, address_index };
        let parsed = PathLevel::parse(&level.to_string()).unwrap();
        prop_assert_eq!(parsed, level);
    }

    /// Derivation agrees with the `bip32` crate for arbitrary seeds and paths.
    ///
    /// `bip32::XPrv` only takes 16, 32 or 64-byte seeds.
    #[test]
    fn prop_derivation_matches_bip32(
        seed in prop::sample::select(vec![16usize, 32, 64])
            .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len)),
        coin_type in 0u32..0x8000_0000,
        account in 0u32..0x8000_0000,
        change in 0u32..=1,
        address_index in 0u32..0x8000_0000,
    ) {
        let level = PathLevel::bip44(coin_type, account, change, address_index);
        let ours = Secp256k1Deriver::derive_path(&seed, &level.indices()).unwrap();

        let path = bip32::DerivationPath::from_str(&level.to_string()).unwrap();
        let xprv = bip32::XPrv::derive_from_path(&seed, &path).unwrap();
        let theirs: [u8; 32] = xprv.private_key().to_bytes().into();

        prop_assert_eq!(*ours.to_bytes(), theirs);
    }
}
