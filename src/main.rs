use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use river_sampling::logging;
use river_sampling::sampling::config::SamplerCfg;
use river_sampling::sampling::piecewise::PiecewiseInverse;
use river_sampling::sampling::sampler::sample;

/// Draw samples from a piecewise-linear CDF by inverse-transform sampling
#[derive(Parser)]
#[command(name = "inverse-sample")]
struct Cli {
    /// Coordinate file (`x y` per line), or the sample count when it is the only argument
    first: Option<String>,

    /// Number of samples to draw
    second: Option<String>,

    /// Seed for the random source. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

fn usage() {
    println!("Usage: inverse-sample [piecewise-data] [num]");
}

fn parse_count(arg: &str) -> Result<usize> {
    arg.parse()
        .with_context(|| format!("invalid sample count {arg:?}"))
}

fn main() -> Result<()> {
    let _ = logging::try_init();
    let cli = Cli::parse();

    let (inverse, n) = match (cli.first, cli.second) {
        (None, _) => {
            usage();
            return Ok(());
        }
        (Some(num), None) => {
            let n = parse_count(&num)?;
            (PiecewiseInverse::from_reader(io::stdin().lock())?, n)
        }
        (Some(path), Some(num)) => {
            let n = parse_count(&num)?;
            let file = File::open(&path)
                .with_context(|| format!("failed to open {path}"))?;
            let inverse = PiecewiseInverse::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to read {path}"))?;
            (inverse, n)
        }
    };

    let mut cfg = SamplerCfg::new().set_n_samples(n);
    if let Some(seed) = cli.seed {
        cfg = cfg.set_seed(seed);
    }

    let report = sample(&inverse, cfg)?;

    let mut out = BufWriter::new(io::stdout().lock());
    for x in report.rounded() {
        writeln!(out, "{x}")?;
    }
    out.flush()?;

    Ok(())
}
