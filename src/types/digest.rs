//! Input digest and index selection.
//!
//! A [`Digest`] is the SHA-256 of the trimmed input, read as a 256-bit
//! big-endian unsigned integer. Every decision made while building an icon
//! (the cell pattern, the background, each cell fill) is derived from the
//! same digest, so an icon is a pure function of its input string.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest as _, Sha256};

use crate::error::{IconError, Result};

/// Width of a digest in bytes.
pub const DIGEST_BYTES: usize = 32;

/// Width of a digest in bits.
pub const DIGEST_BITS: usize = DIGEST_BYTES * 8;

/// Strip surrounding whitespace, counting the information separators
/// U+001C..=U+001F as whitespace too.
pub fn clean_input(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// A 256-bit unsigned integer derived from an input string.
///
/// Stored as 32 big-endian bytes: `bytes[0]` is most significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; DIGEST_BYTES],
}

impl Digest {
    /// Hash the UTF-8 bytes of `input` after [`clean_input`].
    pub fn from_input(input: &str) -> Self {
        let hash = Sha256::digest(clean_input(input).as_bytes());
        Self { bytes: hash.into() }
    }

    /// Create from 32 bytes (big-endian)
    pub const fn from_be_bytes(bytes: [u8; DIGEST_BYTES]) -> Self {
        Self { bytes }
    }

    /// Convert to 32 bytes (big-endian)
    pub fn to_be_bytes(&self) -> [u8; DIGEST_BYTES] {
        self.bytes
    }

    /// Lowercase hexadecimal form, as printed by `sha256sum`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// `digest mod modulus`.
    pub fn rem(&self, modulus: u64) -> Result<u64> {
        if modulus == 0 {
            return Err(IconError::DivisionDomain);
        }
        let modulus = u128::from(modulus);
        let rem = self
            .bytes
            .iter()
            .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % modulus);
        Ok(rem as u64)
    }

    /// Index into a selection space of `space_size` entries: `digest mod space_size`.
    pub fn select_index(&self, space_size: usize) -> Result<usize> {
        Ok(self.rem(space_size as u64)? as usize)
    }

    /// `(digest mod space_size + offset) mod space_size`.
    ///
    /// Used with the 1-based cell position as `offset` so neighbouring cells
    /// walk through the palette instead of repeating one colour.
    pub fn select_index_with_offset(&self, space_size: usize, offset: usize) -> Result<usize> {
        let base = u128::from(self.rem(space_size as u64)?);
        let shifted = (base + offset as u128) % space_size as u128;
        Ok(shifted as usize)
    }

    /// The lowest `count` bits of the digest, most significant first.
    ///
    /// When `count` exceeds [`DIGEST_BITS`] the result is left-padded with zeros.
    pub fn low_bits(&self, count: usize) -> Vec<bool> {
        let padding = count.saturating_sub(DIGEST_BITS);
        let taken = count - padding;
        let mut bits = vec![false; padding];
        bits.extend((DIGEST_BITS - taken..DIGEST_BITS).map(|i| self.bit(i)));
        bits
    }

    /// Bit at position `i`, counting from the most significant bit.
    fn bit(&self, i: usize) -> bool {
        self.bytes[i / 8] & (0x80 >> (i % 8)) != 0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}
