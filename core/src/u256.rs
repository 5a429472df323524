//! Checked 256-bit integer arithmetic.
//!
//! This wraps `crypto-bigint`'s fixed-width `Uint<4>` so that call sites in this crate never
//! depend on `crypto-bigint`'s API shape directly — only this module does. All arithmetic here
//! is checked: a wrap or truncation is a correctness bug, not a valid outcome, so every
//! operation that can overflow returns [`ConsensusError::U256Overflow`] instead of wrapping.

use crate::error::ConsensusError;
use crypto_bigint::{CheckedMul, Encoding, U256 as Inner};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An unsigned 256-bit integer with checked add/sub/mul/div and shifts.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct U256(Inner);

impl U256 {
    pub const ZERO: Self = Self(Inner::ZERO);
    pub const ONE: Self = Self(Inner::ONE);
    pub const MAX: Self = Self(Inner::MAX);

    pub fn from_u32(value: u32) -> Self {
        Self(Inner::from_u32(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Inner::from_u64(value))
    }

    /// Interprets `bytes` as a big-endian 256-bit integer.
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(Inner::from_be_bytes(bytes))
    }

    /// Interprets `bytes` as a little-endian 256-bit integer.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(Inner::from_le_bytes(bytes))
    }

    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn to_le_bytes(self) -> [u8; 32] {
        self.0.to_le_bytes()
    }

    /// Number of bits required to represent this value (0 for zero).
    pub fn bit_len(self) -> u32 {
        self.0.bits()
    }

    /// Minimal number of bytes required to represent this value (0 for zero).
    pub fn byte_len(self) -> u32 {
        self.bit_len().div_ceil(8)
    }

    pub fn is_zero(self) -> bool {
        self.0 == Inner::ZERO
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, ConsensusError> {
        Option::from(self.0.checked_add(&rhs.0))
            .map(Self)
            .ok_or(ConsensusError::U256Overflow)
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self, ConsensusError> {
        Option::from(self.0.checked_sub(&rhs.0))
            .map(Self)
            .ok_or(ConsensusError::U256Overflow)
    }

    pub fn checked_mul(self, rhs: Self) -> Result<Self, ConsensusError> {
        Option::from(CheckedMul::checked_mul(&self.0, &rhs.0))
            .map(Self)
            .ok_or(ConsensusError::U256Overflow)
    }

    /// Divides by `rhs`. Fails with [`ConsensusError::U256Overflow`] on division by zero, the
    /// only way fixed-width division here can fail.
    pub fn checked_div(self, rhs: Self) -> Result<Self, ConsensusError> {
        Option::from(self.0.checked_div(&rhs.0))
            .map(Self)
            .ok_or(ConsensusError::U256Overflow)
    }

    /// Shifts left by `shift` bits, failing if any set bit would be shifted out.
    pub fn checked_shl(self, shift: u32) -> Result<Self, ConsensusError> {
        if shift >= 256 {
            return if self.is_zero() {
                Ok(Self::ZERO)
            } else {
                Err(ConsensusError::U256Overflow)
            };
        }
        Option::from(self.0.checked_shl(shift))
            .map(Self)
            .ok_or(ConsensusError::U256Overflow)
    }

    /// Shifts right by `shift` bits. Shifting by 256 or more yields zero.
    pub fn shr(self, shift: u32) -> Self {
        if shift >= 256 {
            return Self::ZERO;
        }
        Self(self.0 >> shift as usize)
    }

    pub fn min(self, other: Self) -> Self {
        match self.cmp(&other) {
            Ordering::Greater => other,
            _ => self,
        }
    }
}

impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl std::fmt::Display for U256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x")?;
        for byte in self.to_be_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

// `crypto_bigint::U256` carries no serde impl in the feature set this crate enables, so this
// type serializes over its big-endian byte representation instead of deriving through `Inner`.
impl serde::Serialize for U256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_be_bytes().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for U256 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes = <[u8; 32]>::deserialize(deserializer)?;
        Ok(Self::from_be_bytes(bytes))
    }
}
