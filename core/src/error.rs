//! The single error taxonomy surfaced by this crate.
//!
//! Every fallible operation in `btc-consensus-core` returns a [`ConsensusError`]; none are
//! recovered internally. A failing [`crate::transition::apply`] call never mutates the
//! [`crate::chain_state::ChainState`] it was given — see the call site for that guarantee.

/// Errors produced while validating or applying a candidate block.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ConsensusError {
    /// The header's declared hash does not match the recomputed double-SHA-256 of its preimage.
    #[error("declared block hash does not match the recomputed preimage hash")]
    InvalidBlockHash,

    /// The compact `bits` encoding has its sign bit set.
    #[error("compact target {0:#010x} has the sign bit set")]
    NegativeTarget(u32),

    /// Decoding `bits` would require a target wider than 256 bits.
    #[error("compact target {0:#010x} overflows a 256-bit target")]
    TargetOverflow(u32),

    /// The decoded target exceeds the network maximum target.
    #[error("decoded target exceeds the network maximum target")]
    TargetAboveMax,

    /// The header's `bits` does not equal the target expected for its height.
    #[error("unexpected target at height {height}: expected {expected:#010x}, got {actual:#010x}")]
    UnexpectedTarget {
        height: u32,
        expected: u32,
        actual: u32,
    },

    /// The header's hash, as a 256-bit integer, exceeds the target its `bits` decode to.
    #[error("block hash does not satisfy the declared proof-of-work target")]
    InsufficientWork,

    /// The header's `time` is not strictly greater than the median of the last 11 timestamps.
    #[error("header time {time} is not after the median time past {median}")]
    TimestampTooOld { time: u32, median: u32 },

    /// The Merkle root was requested over an empty leaf sequence.
    #[error("cannot compute a Merkle root over an empty leaf sequence")]
    EmptyMerkleInput,

    /// Two adjacent, distinct tree positions held an identical hash (CVE-2012-2459).
    #[error("duplicate sibling hash detected at Merkle tree level {level}, position {position}")]
    DuplicateSibling { level: usize, position: usize },

    /// Summing transaction fees in `u64` would overflow.
    #[error("summing transaction fees overflowed u64")]
    FeeOverflow,

    /// The coinbase's total output value exceeds `subsidy + fees`.
    #[error("coinbase overpays: outputs {outputs} exceed subsidy+fees {allowed}")]
    CoinbaseOverpay { outputs: u64, allowed: u64 },

    /// Full-validation mode was requested with no transactions present.
    #[error("full-validation block has no coinbase transaction")]
    CoinbaseMissing,

    /// A transaction shaped like a coinbase was found at an index other than 0.
    #[error("coinbase-shaped transaction found at index {0}, expected index 0")]
    CoinbaseMisplaced(usize),

    /// The first transaction is not a well-formed coinbase (wrong input count or outpoint).
    #[error("first transaction is not a valid coinbase")]
    InvalidCoinbaseInput,

    /// Checked arithmetic on a [`crate::u256::U256`] overflowed or underflowed.
    #[error("u256 arithmetic overflowed")]
    U256Overflow,

    /// The external UTXO collaborator rejected a transaction.
    #[error("UTXO collaborator rejected a transaction: {0}")]
    UtxoFailure(String),
}
