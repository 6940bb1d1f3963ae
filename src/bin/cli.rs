// src/bin/cli.rs
use std::process::ExitCode;

use lexi_scrape::cli;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    cli::run()
}
