//! Kill-script generator binary

use std::io;

use clap::Parser;
use covtools::killgen::{run, KillGenArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = KillGenArgs::parse();
    run(&args, &mut io::stdout())
}
