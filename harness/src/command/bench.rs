use std::path::PathBuf;

use btc_consensus_programs::{CONSENSUS_PROGRAM_ELF, ProgramOutput};
use clap::Parser;
use sp1_sdk::{ProverClient, SP1Stdin};

use crate::cli::Args;
use crate::vectors::VectorFile;

struct ProofInfo {
    block_index: usize,
    proving_time_secs: u64,
}

struct ProvingStats {
    stats: Vec<ProofInfo>,
}

impl ProvingStats {
    fn new(capacity: usize) -> Self {
        Self {
            stats: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, block_index: usize, proving_time_secs: u64) {
        self.stats.push(ProofInfo {
            block_index,
            proving_time_secs,
        });
    }

    fn print_summary(&mut self) {
        if self.stats.len() < 3 {
            println!("not enough data points for a summary (need at least 3)");
            return;
        }

        self.stats.sort_by_key(|info| info.proving_time_secs);

        let trimmed = &self.stats[1..self.stats.len() - 1];
        let avg =
            trimmed.iter().map(|i| i.proving_time_secs).sum::<u64>() as f64 / trimmed.len() as f64;

        let lowest = &self.stats[0];
        let highest = &self.stats[self.stats.len() - 1];

        println!("\n=== Consensus Proof Time Results ===");
        println!("total blocks proven: {}", self.stats.len());
        println!("lowest time:  block {} => {}s", lowest.block_index, lowest.proving_time_secs);
        println!("highest time: block {} => {}s", highest.block_index, highest.proving_time_secs);
        println!("average time (excluding min/max): {avg:.2}s");
    }
}

#[derive(Debug, Parser)]
pub struct BenchCmd {
    /// Path to a JSON file containing a `genesis` chain state and a `blocks` array.
    #[clap(long)]
    pub vectors: PathBuf,

    /// Also write each generated proof to the proof directory under the base path.
    #[clap(long)]
    pub save: bool,
}

impl BenchCmd {
    pub fn run(self, args: Args) -> anyhow::Result<()> {
        // SAFETY: set once, before the prover client reads it, and before any other thread in
        // this single-threaded CLI invocation is spawned.
        unsafe {
            std::env::set_var("SP1_PROVER", args.sp1_prover.to_string());
        }
        tracing::info!(prover = %args.sp1_prover, "set SP1_PROVER");

        let VectorFile { genesis, blocks } = VectorFile::load(&self.vectors)?;
        if blocks.is_empty() {
            anyhow::bail!("vector file has no blocks to prove");
        }

        let client = ProverClient::from_env();
        let (proving_key, _verifying_key) = client.setup(CONSENSUS_PROGRAM_ELF);

        let proof_dir = self.save.then(|| args.base_path().proof_dir());
        let mut stats = ProvingStats::new(blocks.len());
        let mut state = genesis;

        for (index, block) in blocks.iter().enumerate() {
            let mut stdin = SP1Stdin::new();
            stdin.write(&state);
            stdin.write(block);

            let now = std::time::Instant::now();
            let mut proof = client
                .prove(&proving_key, &stdin)
                .run()
                .map_err(|err| anyhow::anyhow!("proof generation failed for block {index}: {err}"))?;
            let proving_time_secs = now.elapsed().as_secs();
            stats.push(index, proving_time_secs);

            let outcome: ProgramOutput = proof.public_values.read();
            match outcome {
                ProgramOutput::Accepted(next_state) => {
                    println!("block {index}: accepted in {proving_time_secs}s");
                    state = next_state;
                }
                ProgramOutput::Rejected(reason) => {
                    println!("block {index}: rejected in {proving_time_secs}s: {reason}");
                }
            }

            if let Some(dir) = &proof_dir {
                let path = dir.join(format!("block-{index}.bin"));
                proof
                    .save(&path)
                    .map_err(|err| anyhow::anyhow!("failed to save proof to {}: {err}", path.display()))?;
            }
        }

        stats.print_summary();
        Ok(())
    }
}
