// src/bin/cli.rs
use ark_scrape::cli::{self, Args};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run(Args::parse())
}
