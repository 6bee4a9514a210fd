// src/main.rs
use anyhow::Result;
use clap::Parser;
use mdutils::{Args, init_logging, run};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
