//! Interface-level transaction shapes.
//!
//! Script bodies, witness data, and general input/output parsing are out of scope: only the
//! fields [`crate::coinbase`] and the null-outpoint check need are modeled here.

use serde::{Deserialize, Serialize};

use crate::consts::COINBASE_OUTPOINT_VOUT;
use crate::hash::HashPrimitive;

/// A reference to a previous transaction's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    pub txid: [u8; 32],
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint a coinbase's sole input must reference.
    pub const NULL: Self = Self {
        txid: [0u8; 32],
        vout: COINBASE_OUTPOINT_VOUT,
    };

    pub fn is_null(self) -> bool {
        self == Self::NULL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub previous_output: OutPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
}

impl Transaction {
    /// A transaction is coinbase-shaped when it has exactly one input referencing the null
    /// outpoint. Does not check *position* within the block — that's [`crate::coinbase`]'s job.
    pub fn is_coinbase_shaped(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }

    /// Sums the output values. Fails with [`crate::error::ConsensusError::FeeOverflow`] rather
    /// than wrapping, matching the checked-arithmetic discipline the fee-accumulation loop in
    /// [`crate::transition`] uses for the same class of sum.
    pub fn total_output_value(&self) -> Result<u64, crate::error::ConsensusError> {
        self.outputs.iter().try_fold(0u64, |total, out| {
            total
                .checked_add(out.value)
                .ok_or(crate::error::ConsensusError::FeeOverflow)
        })
    }

    /// The 32-byte Merkle leaf for this transaction: a double-SHA-256 over its inputs and
    /// outputs in declaration order. Not a full Bitcoin txid (script and witness data are out
    /// of scope), but deterministic and collision-resistant enough to feed `merkle_root`.
    pub fn leaf_hash(&self, hasher: &impl HashPrimitive) -> [u8; 32] {
        let mut buf = Vec::with_capacity(self.inputs.len() * 36 + self.outputs.len() * 8);
        for input in &self.inputs {
            buf.extend_from_slice(&input.previous_output.txid);
            buf.extend_from_slice(&input.previous_output.vout.to_le_bytes());
        }
        for output in &self.outputs {
            buf.extend_from_slice(&output.value.to_le_bytes());
        }
        hasher.double_sha256(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_outpoint_is_null() {
        assert!(OutPoint::NULL.is_null());
        assert!(!OutPoint {
            txid: [0u8; 32],
            vout: 0
        }
        .is_null());
    }

    #[test]
    fn coinbase_shape_requires_single_null_input() {
        let coinbase = Transaction {
            inputs: vec![TxIn {
                previous_output: OutPoint::NULL,
            }],
            outputs: vec![TxOut { value: 100 }],
        };
        assert!(coinbase.is_coinbase_shaped());

        let two_inputs = Transaction {
            inputs: vec![
                TxIn {
                    previous_output: OutPoint::NULL,
                },
                TxIn {
                    previous_output: OutPoint::NULL,
                },
            ],
            outputs: vec![],
        };
        assert!(!two_inputs.is_coinbase_shaped());
    }

    #[test]
    fn total_output_value_rejects_overflow_instead_of_wrapping() {
        let tx = Transaction {
            inputs: vec![],
            outputs: vec![TxOut { value: u64::MAX }, TxOut { value: 1 }],
        };
        assert_eq!(
            tx.total_output_value(),
            Err(crate::error::ConsensusError::FeeOverflow)
        );
    }

    #[test]
    fn leaf_hash_is_deterministic_and_input_sensitive() {
        use crate::hash::Sha256d;

        let a = Transaction {
            inputs: vec![TxIn {
                previous_output: OutPoint {
                    txid: [1u8; 32],
                    vout: 0,
                },
            }],
            outputs: vec![TxOut { value: 100 }],
        };
        let b = Transaction {
            outputs: vec![TxOut { value: 200 }],
            ..a.clone()
        };

        assert_eq!(a.leaf_hash(&Sha256d), a.leaf_hash(&Sha256d));
        assert_ne!(a.leaf_hash(&Sha256d), b.leaf_hash(&Sha256d));
    }
}
