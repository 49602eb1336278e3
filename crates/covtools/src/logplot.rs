//! The `logplot` command: bucket log lines into gnuplot data files

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use covtools_core::{bucket_lines, compile_filter, render_series, SeriesSpec};
use tracing::{debug, info};

/// Bucket matching log lines per second and write gnuplot data files,
/// one per `<file> <pattern>` pair
#[derive(Debug, Parser)]
#[command(name = "logplot")]
#[command(about = "Turn log files into gnuplot-ready per-second event counts")]
pub struct LogPlotArgs {
    /// Output file prefix; series i is written to <PREFIX><i>.dat
    #[arg(long, default_value = "file")]
    pub prefix: String,

    /// Alternating <logfile> <pattern> pairs
    #[arg(value_name = "FILE_OR_PATTERN", required = true)]
    pub series: Vec<String>,
}

/// Process every series and write one data file each.
///
/// Returns the paths written, in series order.
pub fn run(args: &LogPlotArgs) -> anyhow::Result<Vec<PathBuf>> {
    let specs = SeriesSpec::pair_args(&args.series)?;
    let mut written = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let filter = compile_filter(&spec.pattern)?;
        let content = fs::read_to_string(&spec.path)?;
        let buckets = bucket_lines(content.lines(), &filter);
        debug!(path = %spec.path, buckets = buckets.len(), "bucketed series");

        let out_path = PathBuf::from(format!("{}{}.dat", args.prefix, index));
        fs::write(&out_path, render_series(&buckets))?;
        info!(path = %out_path.display(), "wrote series data");
        written.push(out_path);
    }
    Ok(written)
}
