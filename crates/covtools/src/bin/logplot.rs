//! Log visualizer binary

use clap::Parser;
use covtools::logplot::{run, LogPlotArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = LogPlotArgs::parse();
    run(&args)?;
    Ok(())
}
