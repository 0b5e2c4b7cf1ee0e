use thiserror::Error;

pub type SignerResult<T> = std::result::Result<T, SignerError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignerError {
    #[error("Path Error: {0}")]
    Path(#[from] PathError),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Cryptography Error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Config Error: {0}")]
    Config(String),
}

/// Errors raised while parsing or validating an HD path.
///
/// The first five variants are syntax errors from [`PathLevel::parse`];
/// the last two come from [`PathLevel::validate`] on a path that parsed fine.
///
/// [`PathLevel::parse`]: crate::crypto::PathLevel::parse
/// [`PathLevel::validate`]: crate::crypto::PathLevel::validate
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path '{path}' has {found} segments, expected 6")]
    SegmentCount { path: String, found: usize },

    #[error("path '{path}' must start with 'm'")]
    MissingRoot { path: String },

    #[error("segment '{segment}' of path '{path}' must be hardened (suffix ')")]
    NotHardened { path: String, segment: String },

    #[error("segment '{segment}' of path '{path}' must not be hardened")]
    UnexpectedHardened { path: String, segment: String },

    #[error("segment '{segment}' of path '{path}' is not a valid index: {reason}")]
    InvalidIndex {
        path: String,
        segment: String,
        reason: String,
    },

    #[error("purpose must be 44, got {0}")]
    InvalidPurpose(u32),

    #[error("change must be 0 or 1, got {0}")]
    InvalidChange(u32),
}

impl PathError {
    /// `true` for a syntactically valid path with semantically wrong levels.
    pub fn is_validation(&self) -> bool {
        matches!(self, PathError::InvalidPurpose(_) | PathError::InvalidChange(_))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word #{0} not found in the BIP39 wordlist.")]
    UnknownWord(usize),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    DerivationFailed(String),

    #[error("Invalid digest length: expected {expected} bytes, got {got}")]
    InvalidDigestLength { expected: usize, got: usize },

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
}
