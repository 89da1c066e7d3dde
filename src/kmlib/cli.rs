extern crate pretty_env_logger;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone, Debug)]
#[command(name = "kmeans2d")]
#[command(about = "Lloyd's k-means clustering of 2-D points")]
#[command(version)]
pub struct ArgParser {
    #[command(flatten)]
    pub io: IOParams,

    #[command(flatten)]
    pub km: KMParams,
}

#[derive(clap::Args, Clone, Debug)]
pub struct IOParams {
    /// Input points file, one whitespace-separated x/y pair per record
    #[arg(default_value = "kmeans-data.txt", help_heading = "I/O")]
    pub input: PathBuf,

    /// Output assignments file (overwritten)
    #[arg(short, long, default_value = "kmeans-output.txt", help_heading = "I/O")]
    pub out: PathBuf,

    /// Safety cap on the number of ingested points (unlimited when omitted)
    #[arg(long, help_heading = "I/O")]
    pub max_points: Option<usize>,

    /// Verbose logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[derive(clap::Args, Clone, Debug)]
pub struct KMParams {
    /// Number of clusters; prompted on stdin when omitted
    #[arg(short = 'k', long, help_heading = "Clustering")]
    pub clusters: Option<i64>,

    /// Maximum number of refinement iterations
    #[arg(long, default_value_t = 1000, help_heading = "Clustering")]
    pub max_iterations: usize,

    /// Centroid movement below which the run is considered converged
    #[arg(long, default_value_t = 0.01, help_heading = "Clustering")]
    pub epsilon: f64,

    /// Always run --max-iterations rounds, skipping the convergence check
    #[arg(long, default_value_t = false, help_heading = "Clustering")]
    pub fixed_iterations: bool,

    /// Seed for centroid initialization; drawn from entropy when omitted
    #[arg(long, help_heading = "Clustering")]
    pub seed: Option<u64>,
}

impl ArgParser {
    /// Validate command line arguments
    pub fn validate(&self) -> bool {
        let mut is_ok = true;

        if self.km.epsilon < 0.0 {
            error!("--epsilon must be non-negative");
            is_ok = false;
        }

        if self.km.max_iterations < 1 {
            warn!("--max-iterations 0 leaves every point unassigned");
        }

        if self.io.max_points == Some(0) {
            warn!("--max-points 0 ingests no points");
        }

        is_ok
    }
}
