use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use strum::{Display, EnumString};

use crate::base_path::BasePath;
use crate::command;

/// Supported SP1 prover backends for the `bench` command.
#[derive(Debug, Clone, ValueEnum, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Sp1Prover {
    Mock,
    Cpu,
    Network,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Replay a JSON file of chain states and candidate blocks through the engine and report
    /// accept/reject per block.
    Replay(command::replay::ReplayCmd),
    /// Drive the consensus zkVM program via the SP1 prover SDK and time proof generation.
    Bench(command::bench::BenchCmd),
}

/// Shared CLI arguments across all commands.
#[derive(Debug, clap::Args)]
pub struct Args {
    /// Base path for everything the harness writes to disk (generated proofs). Defaults to the
    /// platform's standard local-data directory.
    #[clap(long, value_parser)]
    pub base_path: Option<PathBuf>,

    /// Sets custom logging filters in the form `<target>=<level>`.
    ///
    /// Log levels (from least to most verbose): `error`, `warn`, `info`, `debug`, `trace`.
    ///
    /// Defaults to `info`.
    #[clap(long, value_name = "LOG_PATTERN", num_args = 1..)]
    pub log: Vec<String>,

    /// Specify the SP1 prover backend to use for `bench`.
    #[clap(long, env = "SP1_PROVER", default_value = "cpu")]
    pub sp1_prover: Sp1Prover,
}

impl Args {
    pub fn base_path(&self) -> BasePath {
        match &self.base_path {
            Some(path) => BasePath::new(path.to_path_buf()),
            None => BasePath::from_project(),
        }
    }
}

/// Consensus engine test-vector harness. Replays recorded chain states and candidate blocks
/// through `btc-consensus-core`, and can time zkVM proof generation for the same inputs. Not a
/// node: no peer I/O, no mempool, no script execution.
#[derive(Debug, Parser)]
pub struct Cli {
    #[clap(flatten)]
    pub args: Args,

    #[command(subcommand)]
    pub cmd: Cmd,
}
