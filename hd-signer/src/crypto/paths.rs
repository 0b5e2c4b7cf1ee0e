// hd-signer/src/crypto/paths.rs
//
// BIP-44 derivation path: m/purpose'/coin_type'/account'/change/address_index

use crate::error::PathError;
use std::fmt;
use std::str::FromStr;

/// Hardened child index offset (BIP-32).
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// The only purpose accepted by [`PathLevel::validate`].
pub const BIP44_PURPOSE: u32 = 44;

/// Number of `/`-separated tokens in a path, root `m` included.
const PATH_SEGMENTS: usize = 6;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 registered coin types commonly paired with secp256k1 keys.
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const BITCOIN: u32 = 0;
    pub const ETHEREUM: u32 = 60;
    pub const COSMOS: u32 = 118;
}

// =============================================================================
// PATH LEVEL
// =============================================================================
/// A parsed `m/44'/<coin_type>'/<account>'/<change>/<address_index>` path.
///
/// The first three levels are always derived hardened and the last two
/// normally. Parsing only checks syntax; call [`PathLevel::validate`] to
/// enforce the BIP-44 purpose and change constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathLevel {
    pub purpose: u32,
    pub coin_type: u32,
    pub account: u32,
    pub change: u32,
    pub address_index: u32,
}

impl PathLevel {
    /// Build a path with purpose 44.
    #[inline]
    pub const fn bip44(coin_type: u32, account: u32, change: u32, address_index: u32) -> Self {
        Self {
            purpose: BIP44_PURPOSE,
            coin_type,
            account,
            change,
            address_index,
        }
    }

    /// Parse the textual form `m/<purpose>'/<coin_type>'/<account>'/<change>/<address_index>`.
    ///
    /// # Errors
    /// - [`PathError::SegmentCount`] unless there are exactly six segments
    /// - [`PathError::MissingRoot`] if the first segment is not exactly `m`
    /// - [`PathError::NotHardened`] if one of the first three levels lacks `'`
    /// - [`PathError::UnexpectedHardened`] if `change` or `address_index` carries `'`
    /// - [`PathError::InvalidIndex`] if a level is not a `u32`
    pub fn parse(path: &str) -> Result<Self, PathError> {
        let segments: Vec<&str> = path.split('/').collect();
        if segments.len() != PATH_SEGMENTS {
            return Err(PathError::SegmentCount {
                path: path.to_string(),
                found: segments.len(),
            });
        }

        if segments[0] != "m" {
            return Err(PathError::MissingRoot {
                path: path.to_string(),
            });
        }

        let purpose = parse_hardened(path, segments[1])?;
        let coin_type = parse_hardened(path, segments[2])?;
        let account = parse_hardened(path, segments[3])?;
        let change = parse_normal(path, segments[4])?;
        let address_index = parse_normal(path, segments[5])?;

        Ok(Self {
            purpose,
            coin_type,
            account,
            change,
            address_index,
        })
    }

    /// Check the BIP-44 constraints: `purpose == 44` and `change` is 0 or 1.
    ///
    /// `coin_type`, `account` and `address_index` are accepted as given.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.purpose != BIP44_PURPOSE {
            return Err(PathError::InvalidPurpose(self.purpose));
        }
        if self.change > 1 {
            return Err(PathError::InvalidChange(self.change));
        }
        Ok(())
    }

    /// BIP-32 child indices in derivation order, hardened bit applied to the
    /// first three levels.
    ///
    /// The hardened bit is OR-ed in, so a level that already has it set
    /// (e.g. `coin_type = 60 | HARDENED_OFFSET`) yields the same index, and
    /// the same key, as the plain value. Such a path still prints through
    /// `Display` but is not valid BIP-32 text elsewhere.
    pub fn indices(&self) -> [u32; 5] {
        [
            self.purpose | HARDENED_OFFSET,
            self.coin_type | HARDENED_OFFSET,
            self.account | HARDENED_OFFSET,
            self.change,
            self.address_index,
        ]
    }
}

impl fmt::Display for PathLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m/{}'/{}'/{}'/{}/{}",
            self.purpose, self.coin_type, self.account, self.change, self.address_index
        )
    }
}

impl FromStr for PathLevel {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_hardened(path: &str, segment: &str) -> Result<u32, PathError> {
    let digits = segment
        .strip_suffix('\'')
        .ok_or_else(|| PathError::NotHardened {
            path: path.to_string(),
            segment: segment.to_string(),
        })?;
    parse_index(path, segment, digits)
}

fn parse_normal(path: &str, segment: &str) -> Result<u32, PathError> {
    if segment.ends_with('\'') {
        return Err(PathError::UnexpectedHardened {
            path: path.to_string(),
            segment: segment.to_string(),
        });
    }
    parse_index(path, segment, segment)
}

fn parse_index(path: &str, segment: &str, digits: &str) -> Result<u32, PathError> {
    digits.parse::<u32>().map_err(|e| PathError::InvalidIndex {
        path: path.to_string(),
        segment: segment.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
