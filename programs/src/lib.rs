//! Re-exports the consensus zkVM program's ELF, and the `ProgramOutput` type (defined in
//! `btc-consensus-core` so the guest program and a prover client share one definition without
//! the guest's RISC-V build pulling in this crate's host-only `sp1-sdk` dependency).

pub use btc_consensus_core::program_output::ProgramOutput;
pub use consensus_program_script::CONSENSUS_PROGRAM_ELF;
