mod base_path;
mod cli;
mod command;
mod vectors;

use clap::Parser;

use self::cli::{Cli, Cmd};

fn initialize_logger(args: &cli::Args) {
    let mut env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
        .from_env_lossy();

    if !args.log.is_empty() {
        for dir in args.log.iter().flat_map(|l| l.split(',')) {
            match dir.parse() {
                Ok(directive) => {
                    env_filter = env_filter.add_directive(directive);
                }
                Err(err) => {
                    eprintln!("invalid log directive '{dir}': {err}");
                }
            }
        }
    }

    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .try_init()
        .expect("failed to set default subscriber");
}

fn main() -> anyhow::Result<()> {
    let Cli { args, cmd } = Cli::parse();

    initialize_logger(&args);

    match cmd {
        Cmd::Replay(replay_cmd) => replay_cmd.run(args)?,
        Cmd::Bench(bench_cmd) => bench_cmd.run(args)?,
    }

    Ok(())
}
