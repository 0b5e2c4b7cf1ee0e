//! Known-answer tests for the full mnemonic → path → key → signature flow.

use alloy_primitives::U256;
use hd_signer::{
    CryptoError, HdSigner, HdSignerConfig, KeyDeriver, PathError, PathLevel, Signer,
    SignerConfig, SignerError, SignerFactory,
};

const TEST_MNEMONIC: &str =
    "math razor capable expose worth grape metal sunset metal sudden usage scheme";
const EVM_PATH: &str = "m/44'/60'/0'/0/0";
const EXPECTED_PUBLIC_KEY: &str =
    "039091a0bc2537530b4eb35672624c147db7c70c986929ede18c8efc2299153399";
const EXPECTED_SIGNATURE: &str = "26ea079b2a54dcec61c9988d4d92eb7ec8922114304d63a3ea2181e39d463484079db88a00f56630fda76a2fd5d83d57dc551784521d8160e6695483f099739700";

fn sequential_digest() -> [u8; 32] {
    std::array::from_fn(|i| i as u8)
}

#[test]
fn test_parse_valid_path() {
    let level = PathLevel::parse(EVM_PATH).unwrap();
    assert_eq!(level.purpose, 44);
    assert_eq!(level.coin_type, 60);
    assert_eq!(level.account, 0);
    assert_eq!(level.change, 0);
    assert_eq!(level.address_index, 0);
    assert!(level.validate().is_ok());
}

#[test]
fn test_parse_failures() {
    for path in [
        "m/44'/60'/0'/0/0/7parts",
        "M/44'/60'/0'/0/0",
        "m/44/60/0/0/0",
        "m/str'/60'/0'/0/0",
    ] {
        let err = PathLevel::parse(path).unwrap_err();
        assert!(!err.is_validation(), "{path} should be a parse error");
    }
}

#[test]
fn test_validation_failures() {
    let wrong_purpose = PathLevel {
        purpose: 41,
        coin_type: 60,
        account: 0,
        change: 0,
        address_index: 0,
    };
    assert_eq!(wrong_purpose.validate(), Err(PathError::InvalidPurpose(41)));

    let wrong_change = PathLevel::bip44(60, 0, 99, 0);
    assert_eq!(wrong_change.validate(), Err(PathError::InvalidChange(99)));

    assert!(PathLevel::bip44(60, 0, 0, 0).validate().is_ok());
}

#[test]
fn test_private_key_scalar() {
    let key = KeyDeriver::derive_from_mnemonic_and_path(TEST_MNEMONIC, EVM_PATH).unwrap();
    assert_eq!(
        U256::from_be_bytes(*key.to_bytes()).to_string(),
        "103621489529634167205139750085116413410837146389409995551260132005794187042961"
    );
}

#[test]
fn test_public_key_and_signature() {
    let signer = HdSigner::new(TEST_MNEMONIC, EVM_PATH).unwrap();

    let public_key = signer.get_public_key(None).unwrap();
    assert_eq!(hex::encode(&public_key), EXPECTED_PUBLIC_KEY);

    let signature = signer.sign(None, &sequential_digest()).unwrap();
    assert_eq!(signature.len(), 65);
    assert_eq!(hex::encode(&signature), EXPECTED_SIGNATURE);
}

#[test]
fn test_address() {
    let signer = HdSigner::new(TEST_MNEMONIC, EVM_PATH).unwrap();
    assert_eq!(
        signer.address().to_string().to_lowercase(),
        "0xa89f47c6b463f74d87572b058427da0a13ec5425"
    );
}

#[test]
fn test_sign_rejects_non_32_byte_digest() {
    let signer = HdSigner::new(TEST_MNEMONIC, EVM_PATH).unwrap();
    let err = signer.sign(None, &[0u8; 31]).unwrap_err();
    assert_eq!(
        err,
        SignerError::Crypto(CryptoError::InvalidDigestLength {
            expected: 32,
            got: 31
        })
    );
}

#[test]
fn test_factory_and_config_agree() {
    let factory: SignerFactory = HdSigner::new;
    let from_factory = factory(TEST_MNEMONIC, EVM_PATH).unwrap();

    let json = format!(r#"{{"mnemonic":"{TEST_MNEMONIC}","path":"{EVM_PATH}"}}"#);
    let config = HdSignerConfig::from_json(&json).unwrap();
    config.validate().unwrap();
    let from_config = config.build().unwrap();

    assert_eq!(from_factory.public_key(), from_config.public_key());
    assert_eq!(
        from_factory.sign(None, &sequential_digest()).unwrap(),
        from_config.sign(None, &sequential_digest()).unwrap()
    );
}
