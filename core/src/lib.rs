//! The stateful core of a Bitcoin block-header consensus engine, built to run deterministically
//! inside a verifiable computation environment: header hashing and compact-target arithmetic,
//! the two-week difficulty retarget, the median-time-past window, and the Merkle-root
//! computation with its CVE-2012-2459 duplicate guard, orchestrated by [`transition::apply`]
//! into a single validate-then-apply step from one [`chain_state::ChainState`] to the next.
//!
//! Transaction and UTXO semantics beyond the coinbase subsidy equation are external
//! collaborators — see [`utxo::UtxoCollaborator`] — this crate only consumes their aggregate
//! result.

pub mod block;
pub mod chain_state;
pub mod coinbase;
pub mod compact_target;
pub mod consts;
pub mod difficulty;
pub mod digest;
pub mod error;
pub mod hash;
pub mod header;
pub mod merkle;
pub mod mtp;
pub mod program_output;
pub mod transaction;
pub mod transition;
pub mod u256;
pub mod utxo;

pub use block::{Block, TransactionData};
pub use chain_state::ChainState;
pub use digest::Digest;
pub use error::ConsensusError;
pub use hash::{HashPrimitive, Sha256d};
pub use header::{Header, HeaderHasher};
pub use program_output::ProgramOutput;
pub use transaction::{OutPoint, Transaction, TxIn, TxOut};
pub use u256::U256;
pub use utxo::{NullUtxoCollaborator, UtxoCollaborator};
