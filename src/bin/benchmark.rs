use std::fs::File;
use std::io::{self, prelude::*, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{ensure, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lazy_components::generate::random_graph;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "cc-benchmark",
    about = "Time connected component discovery on random graphs"
)]
struct Opt {
    /// Numbers of vertices to benchmark [default: 100 500 1000 2000]
    sizes: Vec<usize>,

    /// Edge probabilities to benchmark [default: 0.1 0.3 0.5 0.7 0.9]
    #[structopt(short, long)]
    densities: Vec<f64>,

    /// Runs per (size, density) configuration
    #[structopt(short, long, default_value = "5")]
    runs: usize,

    /// Seed of the random graph generator
    #[structopt(long, default_value = "42")]
    seed: u64,

    /// CSV file the results are written to
    #[structopt(short, long, default_value = "benchmark.csv", parse(from_os_str))]
    output: PathBuf,
}

/// Timing summary of one configuration, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary {
    avg: f64,
    min: f64,
    max: f64,
}

fn summarize(times: &[f64]) -> Summary {
    let sum: f64 = times.iter().sum();
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);
    let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Summary {
        avg: sum / times.len() as f64,
        min,
        max,
    }
}

/// Times `runs` searches on fresh random graphs of `n` vertices and edge
/// probability `p`. Returns the per-run times together with the number
/// of components found in the first run.
fn run_config<R: Rng>(
    n: usize,
    p: f64,
    runs: usize,
    rng: &mut R,
) -> Result<(Vec<f64>, usize)> {
    let mut times = Vec::with_capacity(runs);
    let mut comp_count = 0;

    for run in 0..runs {
        let graph = random_graph(n, p, rng);

        let start = Instant::now();
        let components = graph.find_connected_components()?;
        let time_ms = start.elapsed().as_secs_f64() * 1000.0;

        debug!(n, p, run, time_ms, "finished run");
        times.push(time_ms);
        if run == 0 {
            comp_count = components.len();
        }
    }

    Ok((times, comp_count))
}

const DEFAULT_SIZES: [usize; 4] = [100, 500, 1000, 2000];
const DEFAULT_DENSITIES: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];

fn main() -> Result<()> {
    let mut opt = Opt::from_args();
    if opt.sizes.is_empty() {
        opt.sizes = DEFAULT_SIZES.to_vec();
    }
    if opt.densities.is_empty() {
        opt.densities = DEFAULT_DENSITIES.to_vec();
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("cc_benchmark=info,lazy_components=warn")
            }),
        )
        .with_writer(io::stderr)
        .init();

    ensure!(opt.runs > 0, "at least one run per configuration is needed");
    for &p in opt.densities.iter() {
        ensure!((0.0..=1.0).contains(&p), "density {} is not a probability", p);
    }

    println!("========================================");
    println!("  Benchmark: Connected Components");
    println!("========================================");
    println!("Sizes: {:?}", opt.sizes);
    println!("Densities: {:?}", opt.densities);
    println!("Runs per config: {}\n", opt.runs);

    let file = File::create(&opt.output)
        .with_context(|| format!("cannot create {}", opt.output.display()))?;
    let mut csv = BufWriter::new(file);
    writeln!(
        csv,
        "n;edge_density;avg_time_ms;min_time_ms;max_time_ms;components"
    )?;

    let mut rng = StdRng::seed_from_u64(opt.seed);

    for &n in opt.sizes.iter() {
        for &p in opt.densities.iter() {
            let (times, comp_count) = run_config(n, p, opt.runs, &mut rng)?;

            let summary = summarize(&times);
            writeln!(
                csv,
                "{};{};{};{};{};{}",
                n, p, summary.avg, summary.min, summary.max, comp_count
            )?;

            println!(
                "n={}, p={}, avg={:.3} ms (min={:.3}, max={:.3}), components={}",
                n, p, summary.avg, summary.min, summary.max, comp_count
            );
        }
        println!("----------------------------------------");
    }

    csv.flush()?;
    info!(path = %opt.output.display(), "benchmark results saved");
    println!("\nBenchmark results saved to {}", opt.output.display());

    Ok(())
}
