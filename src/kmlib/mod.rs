mod cli;
pub use crate::kmlib::cli::{ArgParser, IOParams, KMParams};

mod clusterset;
pub use crate::kmlib::clusterset::{Cluster, ClusterSet};

mod errors;
pub use crate::kmlib::errors::{Error, Result};

mod kmeans;
pub use crate::kmlib::kmeans::{
    assign, clamp_k, has_converged, run_lloyd, update, RunState, RunSummary,
};

mod metrics;
pub use crate::kmlib::metrics::{displacement_sq, euclidean};

mod pointstore;
pub use crate::kmlib::pointstore::{load_points, Coord, Point};

mod writer;
pub use crate::kmlib::writer::write_results;
