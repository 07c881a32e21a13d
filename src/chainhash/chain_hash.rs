//! [ChainHash] is the 32 byte identifier used everywhere in a node: block hashes, txids,
//! leaf commitments. It's just a wrapper around [[u8; 32]] that knows about the two ways of
//! looking at those bytes.
//!
//! - The internal form is the raw output of the hash function. That's what goes on the wire
//!   and into storage.
//! - The display form is the hex encoding of the byte-reversed hash. That's what users see and
//!   what JSON carries.
//!
//! # Examples
//! Building from a str
//! ```
//! use std::str::FromStr;
//!
//! use chainhash::chainhash::chain_hash::ChainHash;
//! let hash = ChainHash::from_str(
//!     "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f",
//! )
//! .unwrap();
//! // Internal order is the reverse of the display order
//! assert_eq!(hash.as_bytes()[0], 0x6f);
//! assert_eq!(hash.as_bytes()[31], 0x00);
//! assert_eq!(
//!     hash.to_string().as_str(),
//!     "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
//! );
//! ```
//! Building from a slice
//! ```
//! use chainhash::chainhash::chain_hash::ChainHash;
//! let hash1 = ChainHash::new([0; 32]);
//! // ... or ...
//! let hash2 = ChainHash::from_slice(&[0; 32]).unwrap();
//! assert_eq!(hash1, hash2);
//! assert!(ChainHash::from_slice(&[0; 31]).is_err());
//! ```
use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Deref;
use std::str::FromStr;

use bitcoin_hashes::sha256;
use bitcoin_hashes::sha512_256;
use bitcoin_hashes::Hash;
#[cfg(feature = "with-serde")]
use serde::Deserialize;
#[cfg(feature = "with-serde")]
use serde::Serialize;

use super::error::Error;
use super::error::Result;

/// Size of a [ChainHash] in bytes.
pub const HASH_SIZE: usize = 32;

/// Longest display string accepted by [decode], two hex characters per byte.
pub const MAX_HASH_STRING_SIZE: usize = HASH_SIZE * 2;

/// A 32 byte hash, stored in internal (hash function output) byte order.
/// # Example
/// ```
/// use chainhash::chainhash::chain_hash::ChainHash;
/// let hash = ChainHash::new([0; 32]);
/// assert_eq!(
///     hash.to_string().as_str(),
///     "0000000000000000000000000000000000000000000000000000000000000000"
/// );
/// ```
#[derive(Eq, PartialEq, Copy, Clone, Hash, PartialOrd, Ord, Default)]
pub struct ChainHash([u8; HASH_SIZE]);

impl ChainHash {
    /// Creates a new ChainHash from a 32 byte array, in internal order.
    pub const fn new(inner: [u8; HASH_SIZE]) -> Self {
        ChainHash(inner)
    }

    /// The all-zero hash. Not to be confused with an absent hash, see [ChainHash::is_equal].
    pub const fn all_zeros() -> Self {
        ChainHash([0; HASH_SIZE])
    }

    /// Builds a hash from a slice, failing with [Error::LengthMismatch] unless it holds exactly
    /// [HASH_SIZE] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut hash = ChainHash::default();
        hash.set_bytes(bytes)?;
        Ok(hash)
    }

    /// Overwrites this hash with `bytes`. On error `self` is left untouched.
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() != HASH_SIZE {
            return Err(Error::LengthMismatch {
                expected: HASH_SIZE,
                actual: bytes.len(),
            });
        }
        self.0.copy_from_slice(bytes);

        Ok(())
    }

    /// Parses the byte-reversed hex display form, see [decode].
    /// # Example
    /// ```
    /// use chainhash::chainhash::chain_hash::ChainHash;
    /// let hash = ChainHash::from_display_str("").unwrap();
    /// assert_eq!(hash, ChainHash::all_zeros());
    /// ```
    pub fn from_display_str(s: &str) -> Result<Self> {
        let mut hash = ChainHash::default();
        decode(&mut hash, s)?;
        Ok(hash)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    pub fn to_byte_array(self) -> [u8; HASH_SIZE] {
        self.0
    }

    /// Returns a copy of the internal bytes. The returned vector is independent from this hash.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Compares two possibly absent hashes. Two absent hashes are equal, an absent hash never
    /// equals a present one, even if it's all zeros.
    /// # Example
    /// ```
    /// use chainhash::chainhash::chain_hash::ChainHash;
    /// let zero = ChainHash::all_zeros();
    /// assert!(ChainHash::is_equal(None, None));
    /// assert!(!ChainHash::is_equal(Some(&zero), None));
    /// assert!(ChainHash::is_equal(Some(&zero), Some(&ChainHash::new([0; 32]))));
    /// ```
    pub fn is_equal(hash: Option<&ChainHash>, target: Option<&ChainHash>) -> bool {
        match (hash, target) {
            (None, None) => true,
            (Some(hash), Some(target)) => hash == target,
            _ => false,
        }
    }

    /// Writes the 32 internal bytes, unreversed.
    pub fn write<W>(&self, writer: &mut W) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        writer.write_all(&self.0)
    }

    /// Reads exactly 32 bytes in internal order.
    pub fn read<R>(reader: &mut R) -> std::io::Result<Self>
    where
        R: std::io::Read,
    {
        let mut hash = [0; HASH_SIZE];
        reader.read_exact(&mut hash)?;
        Ok(ChainHash(hash))
    }
}

/// Decodes the byte-reversed hex display form of a hash into `dst`.
///
/// Strings shorter than [MAX_HASH_STRING_SIZE] are treated as if they were left-padded with
/// zeros, so `""` decodes to the all-zero hash and the missing characters end up as zeros at
/// the end of the internal bytes. `dst` is only written once the whole string decoded.
pub fn decode(dst: &mut ChainHash, src: &str) -> Result<()> {
    if src.len() > MAX_HASH_STRING_SIZE {
        return Err(Error::StringTooLong {
            max: MAX_HASH_STRING_SIZE,
            actual: src.len(),
        });
    }

    // Hex decoding needs an even number of characters
    let padded;
    let src = if src.len() % 2 == 0 {
        src
    } else {
        padded = format!("0{src}");
        padded.as_str()
    };

    let mut reversed = [0; HASH_SIZE];
    hex::decode_to_slice(src, &mut reversed[HASH_SIZE - src.len() / 2..])?;

    for (out, byte) in dst.0.iter_mut().zip(reversed.iter().rev()) {
        *out = *byte;
    }

    Ok(())
}

impl Deref for ChainHash {
    type Target = [u8; HASH_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ChainHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for ChainHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl Debug for ChainHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ChainHash({self})")
    }
}

impl FromStr for ChainHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ChainHash::from_display_str(s)
    }
}

impl From<[u8; HASH_SIZE]> for ChainHash {
    fn from(hash: [u8; HASH_SIZE]) -> Self {
        ChainHash(hash)
    }
}

impl From<&[u8; HASH_SIZE]> for ChainHash {
    fn from(hash: &[u8; HASH_SIZE]) -> Self {
        ChainHash(*hash)
    }
}

impl From<ChainHash> for [u8; HASH_SIZE] {
    fn from(hash: ChainHash) -> Self {
        hash.0
    }
}

impl TryFrom<&[u8]> for ChainHash {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        ChainHash::from_slice(bytes)
    }
}

impl From<sha256::Hash> for ChainHash {
    fn from(hash: sha256::Hash) -> Self {
        ChainHash(hash.to_byte_array())
    }
}

impl From<sha512_256::Hash> for ChainHash {
    fn from(hash: sha512_256::Hash) -> Self {
        ChainHash(hash.to_byte_array())
    }
}

// JSON carries the display string, and parsing goes through the same decoder as FromStr
#[cfg(feature = "with-serde")]
impl Serialize for ChainHash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "with-serde")]
impl<'de> Deserialize<'de> for ChainHash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ChainHash::from_display_str(&s).map_err(serde::de::Error::custom)
    }
}
