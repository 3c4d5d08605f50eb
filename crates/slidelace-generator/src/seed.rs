//! Reproducible scramble seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::RngExt as _;
use sha2::{Digest as _, Sha256};

/// A 32-byte seed identifying one scramble.
///
/// Seeds round-trip through their 64-character lowercase hex form, so a
/// scramble can be reported, stored, and replayed.
///
/// # Examples
///
/// ```
/// use slidelace_generator::ScrambleSeed;
///
/// let seed: ScrambleSeed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///     .parse()
///     .unwrap();
/// assert_eq!(seed.to_string().len(), 64);
///
/// // Phrases hash to stable seeds
/// assert_eq!(
///     ScrambleSeed::from_phrase("daily #128"),
///     ScrambleSeed::from_phrase("daily #128"),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrambleSeed([u8; 32]);

/// Errors from parsing a hex seed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {_0}")]
    Length(#[error(not(source))] usize),
    /// The string contains a non-hex character.
    #[display("invalid hex digit in seed")]
    InvalidHexDigit,
}

impl ScrambleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Draws a fresh seed from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed deterministically from a phrase by hashing it with
    /// SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }
}

impl Display for ScrambleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ScrambleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseSeedError::InvalidHexDigit);
        }
        if s.len() != 64 {
            return Err(ParseSeedError::Length(s.len()));
        }
        let mut bytes = [0u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            let pair = std::str::from_utf8(pair).expect("hex digits are ASCII");
            *byte = u8::from_str_radix(pair, 16).expect("checked hex digits parse");
        }
        Ok(Self(bytes))
    }
}
