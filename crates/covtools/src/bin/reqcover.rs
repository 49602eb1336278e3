//! Requirement coverage tally binary

use std::io;

use clap::Parser;
use covtools::cover::{run, CoverArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = CoverArgs::parse();
    run(&args, &mut io::stdout())
}
