//! CLI entry point for the cavewright map generator

use cavewright::io::cli::{Cli, MapRunner};
use clap::Parser;

fn main() -> cavewright::Result<()> {
    let cli = Cli::parse();
    let mut runner = MapRunner::new(cli);
    runner.run()?;
    Ok(())
}
