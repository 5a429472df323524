//! Subsidy schedule and coinbase structural checks.

use crate::consts::{HALVING_INTERVAL, INITIAL_SUBSIDY_SATS, MAX_HALVINGS};
use crate::error::ConsensusError;
use crate::transaction::Transaction;

/// The block subsidy at `height`, in satoshis, before fees.
pub fn subsidy_at_height(height: u32) -> u64 {
    let halvings = height / HALVING_INTERVAL;
    if halvings >= MAX_HALVINGS {
        0
    } else {
        INITIAL_SUBSIDY_SATS >> halvings
    }
}

/// Locates the coinbase transaction (must be index 0, if present), validates its shape, and
/// checks `sum_outputs <= subsidy + total_fees`.
///
/// `total_fees` is the sum already computed by the external UTXO collaborator over every
/// non-coinbase transaction.
pub fn check_coinbase(
    transactions: &[Transaction],
    height: u32,
    total_fees: u64,
) -> Result<(), ConsensusError> {
    let Some(coinbase) = transactions.first() else {
        return Err(ConsensusError::CoinbaseMissing);
    };

    if let Some(index) = transactions
        .iter()
        .skip(1)
        .position(Transaction::is_coinbase_shaped)
    {
        return Err(ConsensusError::CoinbaseMisplaced(index + 1));
    }

    if !coinbase.is_coinbase_shaped() {
        return Err(ConsensusError::InvalidCoinbaseInput);
    }

    let subsidy = subsidy_at_height(height);
    let allowed = subsidy.checked_add(total_fees).ok_or(ConsensusError::FeeOverflow)?;
    let outputs = coinbase.total_output_value()?;
    if outputs > allowed {
        return Err(ConsensusError::CoinbaseOverpay { outputs, allowed });
    }

    Ok(())
}
