//! CLI entry point for the wave function collapse tile solver

use clap::Parser;
use wavetile::io::cli::{Cli, Runner};

fn main() -> wavetile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = Runner::new(cli);
    runner.process()
}
