//! The public value a verifiable-computation entry point built on [`crate::transition::apply`]
//! commits, so the guest program and any off-chain consumer of its proof share one definition.

use serde::{Deserialize, Serialize};

use crate::chain_state::ChainState;

/// Either the next chain state, or the reason the candidate block was rejected. A guest
/// program commits one of these rather than panicking on rejection, so a verifier can tell
/// "this block was checked and refused" apart from "the prover never ran".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramOutput {
    Accepted(ChainState),
    Rejected(String),
}
