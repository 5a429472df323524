//! A 32-byte hash value with Bitcoin's internal/display byte-order duality centralized in one
//! place, so the rest of the crate never has to reason about byte reversal itself.
//!
//! Internally a [`Digest`] is held as eight big-endian `u32` words, matching the word layout
//! SHA-256 itself produces and making the value cheap to re-compose inside a hashing circuit.
//! Externally — wire format, hex display, and test vectors — Bitcoin convention reverses the
//! 32-byte internal representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte digest, stored as 8 big-endian `u32` words internally.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest([u32; 8]);

impl Digest {
    pub const ZERO: Self = Self([0; 8]);

    /// Builds a `Digest` from 32 bytes already in internal (big-endian word) order — i.e. the
    /// raw output of a hash primitive, with no reversal applied.
    pub fn from_internal_bytes(bytes: [u8; 32]) -> Self {
        let mut words = [0u32; 8];
        for (i, word) in words.iter_mut().enumerate() {
            *word = u32::from_be_bytes(bytes[i * 4..i * 4 + 4].try_into().unwrap());
        }
        Self(words)
    }

    /// Returns the 32 bytes in internal (big-endian word) order.
    pub fn to_internal_bytes(self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (i, word) in self.0.iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }
        bytes
    }

    /// Builds a `Digest` from 32 bytes in external display order (byte-reversed relative to
    /// internal order), e.g. as printed by a block explorer or found in a JSON test vector.
    pub fn from_display_bytes(mut bytes: [u8; 32]) -> Self {
        bytes.reverse();
        Self::from_internal_bytes(bytes)
    }

    /// Returns the 32 bytes in external display order.
    pub fn to_display_bytes(self) -> [u8; 32] {
        let mut bytes = self.to_internal_bytes();
        bytes.reverse();
        bytes
    }

    /// Interprets the digest's internal bytes as a little-endian 256-bit integer, the
    /// convention Bitcoin consensus code uses to compare a block hash against a target.
    pub fn as_le_u256(self) -> crate::u256::U256 {
        crate::u256::U256::from_le_bytes(self.to_internal_bytes())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.to_display_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
