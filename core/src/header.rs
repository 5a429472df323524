//! The reduced in-memory header the engine carries forward, and the preimage hasher that binds
//! it to the previous block hash and the transaction set's Merkle root.
//!
//! `prev_block_hash` and `merkle_root` are deliberately not fields of [`Header`]: they are
//! reconstructable from the previous [`crate::chain_state::ChainState`] and the block body, so
//! storing them again on every header would be redundant. [`HeaderHasher::verify`] takes them as
//! explicit parameters instead, forcing the binding to be re-proven on every call.

use crate::digest::Digest;
use crate::error::ConsensusError;
use crate::hash::HashPrimitive;
use serde::{Deserialize, Serialize};

/// The authenticated fields of a block header the engine keeps across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub hash: Digest,
    pub version: u32,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Serializes the canonical 80-byte header preimage and verifies a header's declared hash
/// against it.
pub struct HeaderHasher;

impl HeaderHasher {
    /// Builds the 80-byte wire preimage: `version || prev_block_hash || merkle_root || time ||
    /// bits || nonce`, with `prev_block_hash` and `merkle_root` taken in internal byte order, as
    /// received over the wire.
    pub fn preimage(header: &Header, prev_block_hash: Digest, merkle_root: Digest) -> [u8; 80] {
        let mut buf = [0u8; 80];
        buf[0..4].copy_from_slice(&header.version.to_le_bytes());
        buf[4..36].copy_from_slice(&prev_block_hash.to_internal_bytes());
        buf[36..68].copy_from_slice(&merkle_root.to_internal_bytes());
        buf[68..72].copy_from_slice(&header.time.to_le_bytes());
        buf[72..76].copy_from_slice(&header.bits.to_le_bytes());
        buf[76..80].copy_from_slice(&header.nonce.to_le_bytes());
        buf
    }

    /// Recomputes the preimage hash and checks it against `header.hash`.
    pub fn verify(
        header: &Header,
        prev_block_hash: Digest,
        merkle_root: Digest,
        hasher: &impl HashPrimitive,
    ) -> Result<(), ConsensusError> {
        let preimage = Self::preimage(header, prev_block_hash, merkle_root);
        let computed = Digest::from_internal_bytes(hasher.double_sha256(&preimage));
        if computed == header.hash {
            Ok(())
        } else {
            Err(ConsensusError::InvalidBlockHash)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Sha256d;

    fn decode_display_hex(hex_str: &str) -> Digest {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_str, &mut bytes).unwrap();
        Digest::from_display_bytes(bytes)
    }

    /// Bitcoin mainnet block 170 — the first block to spend a previous transaction's output.
    fn block_170_header() -> (Header, Digest, Digest) {
        let prev = decode_display_hex(
            "000000002a22cfee1f2c846adbd12b3e183d4f97683f85dad08a79780a84bd55",
        );
        let merkle = decode_display_hex(
            "7dac2c5666815c17a3b36427de37bb9d2e2c5ccec3f8633eb91a4205cb4c10ff",
        );
        let hash = decode_display_hex(
            "00000000d1145790a8694403d4063f323d499e655c83426834d4ce2f8dd4a2ee",
        );
        let header = Header {
            hash,
            version: 1,
            time: 1_231_731_025,
            bits: 0x1d00ffff,
            nonce: 1_889_418_792,
        };
        (header, prev, merkle)
    }

    #[test]
    fn block_170_hash_checks_out() {
        let (header, prev, merkle) = block_170_header();
        assert!(HeaderHasher::verify(&header, prev, merkle, &Sha256d).is_ok());
    }

    #[test]
    fn wrong_merkle_root_is_rejected() {
        let (header, prev, merkle) = block_170_header();
        let mut display = merkle.to_display_bytes();
        // Flip the first hex digit: 0x7d.. -> 0x6d..
        display[0] = (display[0] & 0x0f) | 0x60;
        let wrong_merkle = Digest::from_display_bytes(display);
        assert_eq!(
            HeaderHasher::verify(&header, prev, wrong_merkle, &Sha256d),
            Err(ConsensusError::InvalidBlockHash)
        );
    }

    #[test]
    fn wrong_prev_hash_is_rejected() {
        let (header, prev, merkle) = block_170_header();
        let mut display = prev.to_display_bytes();
        let last = display.len() - 1;
        display[last] = (display[last] & 0xf0) | 0x6;
        let wrong_prev = Digest::from_display_bytes(display);
        assert_eq!(
            HeaderHasher::verify(&header, wrong_prev, merkle, &Sha256d),
            Err(ConsensusError::InvalidBlockHash)
        );
    }

    #[test]
    fn preimage_is_exactly_80_bytes_in_wire_order() {
        let (header, prev, merkle) = block_170_header();
        let preimage = HeaderHasher::preimage(&header, prev, merkle);
        assert_eq!(preimage.len(), 80);
        assert_eq!(&preimage[0..4], &header.version.to_le_bytes());
        assert_eq!(&preimage[76..80], &header.nonce.to_le_bytes());
    }
}
