//! The external UTXO collaborator interface.
//!
//! The engine treats UTXO validation as an opaque capability: it only needs a deterministic fee
//! for each non-coinbase transaction, and a displayable reason when a collaborator rejects one —
//! it does not know or care what the collaborator's own error type looks like.
//! [`crate::transition::apply`] wraps that reason into [`ConsensusError::UtxoFailure`] rather
//! than requiring every collaborator to produce a `ConsensusError` itself. A generic parameter,
//! not a trait object, per the "no dynamic dispatch" design note — callers monomorphize `apply`
//! over their own collaborator (a stub for tests, a full UTXO-backed store, or a zkVM-resident
//! membership check).

use crate::transaction::Transaction;

/// Validates and applies one non-coinbase transaction against an external UTXO view, returning
/// the fee it pays.
pub trait UtxoCollaborator {
    type Error: std::fmt::Display;

    fn apply_transaction(&mut self, transaction: &Transaction) -> Result<u64, Self::Error>;
}

/// A collaborator that accepts every transaction and reports zero fees. Useful for tests and
/// header-only deployments that only ever supply `TransactionData::MerkleRoot`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullUtxoCollaborator;

impl UtxoCollaborator for NullUtxoCollaborator {
    type Error = std::convert::Infallible;

    fn apply_transaction(&mut self, _transaction: &Transaction) -> Result<u64, Self::Error> {
        Ok(0)
    }
}
