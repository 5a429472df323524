use std::path::PathBuf;

use btc_consensus_core::transition;
use btc_consensus_core::{NullUtxoCollaborator, Sha256d};
use clap::Parser;

use crate::cli::Args;
use crate::vectors::VectorFile;

#[derive(Debug, Parser)]
pub struct ReplayCmd {
    /// Path to a JSON file containing a `genesis` chain state and a `blocks` array.
    #[clap(long)]
    pub vectors: PathBuf,
}

impl ReplayCmd {
    pub fn run(self, _args: Args) -> anyhow::Result<()> {
        let VectorFile { genesis, blocks } = VectorFile::load(&self.vectors)?;
        tracing::info!(path = %self.vectors.display(), count = blocks.len(), "loaded vector file");

        let mut state = genesis;
        let mut accepted = 0usize;
        let mut rejected = 0usize;

        for (index, block) in blocks.iter().enumerate() {
            match transition::apply(&state, block, &Sha256d, &mut NullUtxoCollaborator) {
                Ok(next_state) => {
                    println!(
                        "block {index} at height {}: accepted, next height {}",
                        state.block_height, next_state.block_height
                    );
                    accepted += 1;
                    state = next_state;
                }
                Err(error) => {
                    println!(
                        "block {index} at height {}: rejected: {error}",
                        state.block_height
                    );
                    rejected += 1;
                }
            }
        }

        println!("\n{accepted} accepted, {rejected} rejected, final height {}", state.block_height);
        Ok(())
    }
}
