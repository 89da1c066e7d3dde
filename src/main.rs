extern crate pretty_env_logger;

#[macro_use]
extern crate log;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

mod kmlib;

use kmlib::{
    clamp_k, load_points, run_lloyd, write_results, ArgParser, ClusterSet, Error, Result, RunState,
};

/// Prompt on stdout and read the requested cluster count from stdin.
fn read_cluster_count(n_points: usize) -> Result<i64> {
    print!("Enter number of clusters (1-{}): ", n_points);
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|_| Error::InvalidClusterCount {
            input: String::new(),
        })?;

    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::InvalidClusterCount {
            input: trimmed.to_string(),
        })
}

fn run(args: ArgParser) -> Result<()> {
    let mut points = load_points(&args.io.input, args.io.max_points)?;
    info!("read {} points", points.len());

    let requested = match args.km.clusters {
        Some(k) => k,
        None => read_cluster_count(points.len())?,
    };
    let k = clamp_k(requested, points.len());
    info!("using {} clusters", k);

    let mut rng: StdRng = match args.km.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut clusters = ClusterSet::initialize(k, &mut rng);

    let summary = run_lloyd(&mut points, &mut clusters, &args.km);
    match summary.state {
        RunState::Converged => info!("converged after {} iterations", summary.iterations),
        RunState::MaxIterationsReached if args.km.fixed_iterations => {
            info!("completed {} fixed iterations", summary.iterations)
        }
        RunState::MaxIterationsReached => warn!(
            "stopped at the iteration cap of {} without converging",
            summary.iterations
        ),
    }

    write_results(&args.io.out, &points)?;
    info!("results written to {}", args.io.out.display());

    Ok(())
}

fn main() {
    let args = ArgParser::parse();
    let level = if args.io.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(level)
        .init();

    info!("starting");
    if !args.validate() {
        error!("please fix arguments");
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
    info!("finished");
}
