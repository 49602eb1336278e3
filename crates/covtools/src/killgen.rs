//! The `killgen` command: emit a process kill script

use std::io::Write;

use clap::Parser;
use covtools_core::{render_kill_script, KillOrder, DEFAULT_PROCESSES};
use tracing::debug;

/// Generate a shell script that kills processes one by one, printing a
/// `free` snapshot between kills
#[derive(Debug, Parser)]
#[command(name = "killgen")]
#[command(about = "Generate a kill script with free-memory snapshots between kills")]
pub struct KillGenArgs {
    /// Emit the process list in the order given instead of reversed
    #[arg(long)]
    pub forward: bool,

    /// Process match strings; defaults to the built-in router set
    #[arg(value_name = "PROCESS")]
    pub processes: Vec<String>,
}

/// Write the generated script.
pub fn run(args: &KillGenArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let order = if args.forward {
        KillOrder::Forward
    } else {
        KillOrder::Reverse
    };
    let script = if args.processes.is_empty() {
        debug!("no processes given, using the built-in list");
        render_kill_script(&DEFAULT_PROCESSES, order)
    } else {
        render_kill_script(&args.processes, order)
    };
    out.write_all(script.as_bytes())?;
    Ok(())
}
