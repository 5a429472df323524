//! Orchestrates the validate-then-apply sequence that turns a candidate block into the next
//! chain state.

use tracing::{debug, warn};

use crate::block::{Block, TransactionData};
use crate::chain_state::ChainState;
use crate::coinbase;
use crate::compact_target::{bits_to_checked_target, compute_work_from_target};
use crate::consts::MTP_WINDOW;
use crate::difficulty;
use crate::error::ConsensusError;
use crate::hash::HashPrimitive;
use crate::header::HeaderHasher;
use crate::merkle::merkle_root;
use crate::mtp;
use crate::utxo::UtxoCollaborator;

/// Validates `block` against `state` and, on success, returns the next `ChainState`.
///
/// On any failure the original `state` is never touched; the caller still owns it and may
/// retry with a different candidate. `height` of the candidate block is `state.block_height`
/// — the number of blocks already applied, which is also the height of the block about to be
/// applied.
pub fn apply<H, U>(
    state: &ChainState,
    block: &Block,
    hasher: &H,
    utxo: &mut U,
) -> Result<ChainState, ConsensusError>
where
    H: HashPrimitive,
    U: UtxoCollaborator,
{
    let height = state.block_height;
    let header = &block.header;

    debug!(height, "validating header hash");
    let merkle = match &block.data {
        TransactionData::MerkleRoot(root) => *root,
        TransactionData::Transactions(transactions) => {
            let leaves: Vec<[u8; 32]> = transactions
                .iter()
                .map(|tx| tx.leaf_hash(hasher))
                .collect();
            crate::digest::Digest::from_internal_bytes(merkle_root(&leaves, hasher).inspect_err(
                |error| warn!(height, ?error, "merkle root computation failed"),
            )?)
        }
    };
    HeaderHasher::verify(header, state.best_block_hash, merkle, hasher).inspect_err(|error| {
        warn!(height, ?error, "header hash verification failed");
    })?;

    debug!(height, bits = header.bits, "checking target encoding");
    let target = bits_to_checked_target(header.bits).inspect_err(|error| {
        warn!(height, bits = header.bits, ?error, "target encoding check failed");
    })?;

    debug!(height, "checking expected target and retarget boundary");
    difficulty::check_target(
        height,
        header.bits,
        state.current_target,
        state.epoch_start_time,
        header.time,
    )
    .inspect_err(|error| warn!(height, ?error, "expected target mismatch"))?;

    debug!(height, "checking proof of work");
    difficulty::check_proof_of_work(header.hash.as_le_u256(), target)
        .inspect_err(|error| warn!(height, ?error, "insufficient proof of work"))?;

    debug!(height, time = header.time, "checking median time past");
    mtp::check_timestamp(header.time, &state.prev_timestamps, height)
        .inspect_err(|error| warn!(height, ?error, "timestamp check failed"))?;

    if let TransactionData::Transactions(transactions) = &block.data {
        debug!(height, count = transactions.len(), "applying transactions");
        let mut total_fees: u64 = 0;
        for transaction in transactions.iter().skip(1) {
            let fee = utxo
                .apply_transaction(transaction)
                .map_err(|error| ConsensusError::UtxoFailure(error.to_string()))
                .inspect_err(|error| {
                    warn!(height, ?error, "utxo collaborator rejected a transaction");
                })?;
            total_fees = total_fees
                .checked_add(fee)
                .ok_or(ConsensusError::FeeOverflow)
                .inspect_err(|error| warn!(height, ?error, "fee accumulation overflowed"))?;
        }
        coinbase::check_coinbase(transactions, height, total_fees)
            .inspect_err(|error| warn!(height, ?error, "coinbase check failed"))?;
    }

    debug!(height, "applying accepted block");
    let is_retarget = difficulty::is_retarget_height(height);
    let work = compute_work_from_target(target)?;

    let mut prev_timestamps = state.prev_timestamps;
    mtp::rotate(&mut prev_timestamps, height + 1, header.time);

    Ok(ChainState {
        block_height: height + 1,
        total_work: state.total_work.checked_add(work)?,
        best_block_hash: header.hash,
        current_target: header.bits,
        epoch_start_time: if is_retarget {
            header.time
        } else {
            state.epoch_start_time
        },
        prev_timestamps,
    })
}

const _: () = assert!(MTP_WINDOW == 11);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::Digest;
    use crate::hash::Sha256d;
    use crate::header::Header;
    use crate::utxo::NullUtxoCollaborator;

    fn decode_display_hex(hex_str: &str) -> Digest {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_str, &mut bytes).unwrap();
        Digest::from_display_bytes(bytes)
    }

    #[test]
    fn block_170_applies_in_header_only_mode() {
        let prev =
            decode_display_hex("000000002a22cfee1f2c846adbd12b3e183d4f97683f85dad08a79780a84bd55");
        let merkle =
            decode_display_hex("7dac2c5666815c17a3b36427de37bb9d2e2c5ccec3f8633eb91a4205cb4c10ff");
        let hash =
            decode_display_hex("00000000d1145790a8694403d4063f323d499e655c83426834d4ce2f8dd4a2ee");

        let header = Header {
            hash,
            version: 1,
            time: 1_231_731_025,
            bits: 0x1d00ffff,
            nonce: 1_889_418_792,
        };
        let block = Block {
            header,
            data: TransactionData::MerkleRoot(merkle),
        };
        let state = ChainState::genesis(prev, 0x1d00ffff, 1_231_469_665);

        let next = apply(&state, &block, &Sha256d, &mut NullUtxoCollaborator).unwrap();
        assert_eq!(next.block_height, 1);
        assert_eq!(next.best_block_hash, hash);
        assert_eq!(next.current_target, 0x1d00ffff);
    }

    #[test]
    fn failed_application_never_mutates_the_caller_copy() {
        let prev =
            decode_display_hex("000000002a22cfee1f2c846adbd12b3e183d4f97683f85dad08a79780a84bd55");
        let wrong_merkle = Digest::ZERO;
        let hash =
            decode_display_hex("00000000d1145790a8694403d4063f323d499e655c83426834d4ce2f8dd4a2ee");

        let header = Header {
            hash,
            version: 1,
            time: 1_231_731_025,
            bits: 0x1d00ffff,
            nonce: 1_889_418_792,
        };
        let block = Block {
            header,
            data: TransactionData::MerkleRoot(wrong_merkle),
        };
        let state = ChainState::genesis(prev, 0x1d00ffff, 1_231_469_665);
        let before = state;

        let result = apply(&state, &block, &Sha256d, &mut NullUtxoCollaborator);
        assert_eq!(result, Err(ConsensusError::InvalidBlockHash));
        assert_eq!(state, before);
    }
}
