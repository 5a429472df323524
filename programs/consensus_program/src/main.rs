#![no_main]
sp1_zkvm::entrypoint!(main);

use btc_consensus_core::chain_state::ChainState;
use btc_consensus_core::error::ConsensusError;
use btc_consensus_core::program_output::ProgramOutput;
use btc_consensus_core::transition;
use btc_consensus_core::{Block, NullUtxoCollaborator, Sha256d};

/// Only header-only and zero-fee transaction validation is supported inside the guest: a full
/// UTXO-backed membership check would need its own witness plumbing, which is out of this
/// program's scope (the engine treats UTXO validation as an external collaborator; this guest
/// supplies the null one).
fn main() {
    let state: ChainState = sp1_zkvm::io::read();
    let block: Block = sp1_zkvm::io::read();

    let outcome = match transition::apply(&state, &block, &Sha256d, &mut NullUtxoCollaborator) {
        Ok(next_state) => ProgramOutput::Accepted(next_state),
        Err(error) => ProgramOutput::Rejected(describe(error)),
    };

    sp1_zkvm::io::commit(&outcome);
}

fn describe(error: ConsensusError) -> String {
    error.to_string()
}
