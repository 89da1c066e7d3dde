#[macro_use]
extern crate log;

mod kmlib;
pub use self::{
    kmlib::assign, kmlib::clamp_k, kmlib::displacement_sq, kmlib::euclidean,
    kmlib::has_converged, kmlib::load_points, kmlib::run_lloyd, kmlib::update,
    kmlib::write_results, kmlib::ArgParser, kmlib::Cluster, kmlib::ClusterSet, kmlib::Coord,
    kmlib::Error, kmlib::IOParams, kmlib::KMParams, kmlib::Point, kmlib::Result, kmlib::RunState,
    kmlib::RunSummary,
};
