// sentinel-log: argument parsing and logging live in `sentinel_log::cli`.

use anyhow::Result;
use clap::Parser;
use sentinel_log::cli::{Cli, run};

fn main() -> Result<()> {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("sentinel-log fatal error: {:#}", e);
        return Err(e);
    }
    Ok(())
}
