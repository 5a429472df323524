//! The value the transition consumes and produces: a fixed-size snapshot of chain progress.

use serde::{Deserialize, Serialize};

use crate::consts::MTP_WINDOW;
use crate::digest::Digest;
use crate::error::ConsensusError;
use crate::u256::U256;

/// The 120-byte on-the-wire length of [`ChainState::to_bytes`].
pub const SERIALIZED_LEN: usize = 4 + 32 + 32 + 4 + 4 + MTP_WINDOW * 4;

/// The fixpoint of [`crate::transition::apply`]: everything the engine needs to validate the
/// next block, and nothing else. A value, not a handle — each transition consumes one and
/// produces the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    pub block_height: u32,
    pub total_work: U256,
    pub best_block_hash: Digest,
    /// Compact form, as declared on the most recently applied header.
    pub current_target: u32,
    /// Timestamp of the first block of the current retarget epoch.
    pub epoch_start_time: u32,
    /// The most recent `min(11, block_height)` applied timestamps, oldest first; zero-padded.
    pub prev_timestamps: [u32; MTP_WINDOW],
}

impl ChainState {
    /// Serializes to the 120-byte layout this engine's callers persist between transitions.
    pub fn to_bytes(&self) -> [u8; SERIALIZED_LEN] {
        let mut buf = [0u8; SERIALIZED_LEN];
        let mut offset = 0;

        buf[offset..offset + 4].copy_from_slice(&self.block_height.to_le_bytes());
        offset += 4;

        buf[offset..offset + 32].copy_from_slice(&self.total_work.to_le_bytes());
        offset += 32;

        buf[offset..offset + 32].copy_from_slice(&self.best_block_hash.to_internal_bytes());
        offset += 32;

        buf[offset..offset + 4].copy_from_slice(&self.current_target.to_le_bytes());
        offset += 4;

        buf[offset..offset + 4].copy_from_slice(&self.epoch_start_time.to_le_bytes());
        offset += 4;

        for timestamp in self.prev_timestamps {
            buf[offset..offset + 4].copy_from_slice(&timestamp.to_le_bytes());
            offset += 4;
        }
        debug_assert_eq!(offset, SERIALIZED_LEN);

        buf
    }

    /// Deserializes from the 120-byte layout produced by [`Self::to_bytes`].
    pub fn from_bytes(bytes: &[u8; SERIALIZED_LEN]) -> Result<Self, ConsensusError> {
        let mut offset = 0;

        let block_height = u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        offset += 4;

        let mut work_bytes = [0u8; 32];
        work_bytes.copy_from_slice(&bytes[offset..offset + 32]);
        let total_work = U256::from_le_bytes(work_bytes);
        offset += 32;

        let mut hash_bytes = [0u8; 32];
        hash_bytes.copy_from_slice(&bytes[offset..offset + 32]);
        let best_block_hash = Digest::from_internal_bytes(hash_bytes);
        offset += 32;

        let current_target = u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        offset += 4;

        let epoch_start_time = u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
        offset += 4;

        let mut prev_timestamps = [0u32; MTP_WINDOW];
        for slot in &mut prev_timestamps {
            *slot = u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap());
            offset += 4;
        }
        debug_assert_eq!(offset, SERIALIZED_LEN);

        Ok(Self {
            block_height,
            total_work,
            best_block_hash,
            current_target,
            epoch_start_time,
            prev_timestamps,
        })
    }

    /// The state before any block has been applied: height zero, no work, a caller-supplied
    /// genesis hash and starting target.
    pub fn genesis(genesis_hash: Digest, genesis_bits: u32, genesis_time: u32) -> Self {
        Self {
            block_height: 0,
            total_work: U256::ZERO,
            best_block_hash: genesis_hash,
            current_target: genesis_bits,
            epoch_start_time: genesis_time,
            prev_timestamps: [0u32; MTP_WINDOW],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_length_is_120_bytes() {
        assert_eq!(SERIALIZED_LEN, 120);
    }

    #[test]
    fn round_trip_is_identity() {
        let state = ChainState {
            block_height: 12345,
            total_work: U256::from_u64(987_654_321),
            best_block_hash: Digest::from_internal_bytes([7u8; 32]),
            current_target: 0x1d00ffff,
            epoch_start_time: 1_600_000_000,
            prev_timestamps: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        };
        let bytes = state.to_bytes();
        assert_eq!(ChainState::from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn genesis_has_zero_height_and_work() {
        let genesis = ChainState::genesis(Digest::ZERO, 0x1d00ffff, 1_231_006_505);
        assert_eq!(genesis.block_height, 0);
        assert_eq!(genesis.total_work, U256::ZERO);
        assert_eq!(genesis.prev_timestamps, [0u32; MTP_WINDOW]);
    }
}
