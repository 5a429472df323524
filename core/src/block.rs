//! The candidate block a [`crate::transition::apply`] call validates against a [`crate::chain_state::ChainState`].

use serde::{Deserialize, Serialize};

use crate::digest::Digest;
use crate::header::Header;
use crate::transaction::Transaction;

/// Either an asserted Merkle root (header-only mode) or the full transaction list (full
/// validation mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionData {
    MerkleRoot(Digest),
    Transactions(Vec<Transaction>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: Header,
    pub data: TransactionData,
}
