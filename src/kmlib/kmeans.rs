use crate::kmlib::{metrics, ClusterSet, Coord, KMParams, Point};
use itertools::Itertools;
use ordered_float::OrderedFloat;

/// Terminal state of the refinement loop.
///
/// Both are usable results; hitting the iteration cap only signals that the
/// centroids had not settled yet, it is not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunState {
    Converged,
    MaxIterationsReached,
}

/// How a run ended and after how many iterations.
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    pub state: RunState,
    pub iterations: usize,
}

/// Point every point at its nearest centroid, counting arrivals per cluster.
///
/// Centroids are scanned in index order and only a strictly smaller distance
/// replaces the current best, so ties stay with the lowest index. Counts must
/// be reset by the caller before this runs.
pub fn assign(points: &mut [Point], clusters: &mut ClusterSet) {
    for point in points.iter_mut() {
        let nearest = clusters
            .iter()
            .position_min_by_key(|c| OrderedFloat(metrics::euclidean(&point.pos, &c.centroid)));
        if let Some(idx) = nearest {
            point.cluster = Some(idx);
            clusters[idx].point_count += 1;
        }
    }
}

/// Recompute each centroid as the arithmetic mean of its assigned points.
///
/// A cluster that received no points keeps its previous centroid. It is
/// never reseeded or reset, so it can stay parked away from the data for
/// the rest of the run; a deliberate policy choice.
pub fn update(clusters: &mut ClusterSet, points: &[Point]) {
    for (idx, cluster) in clusters.iter_mut().enumerate() {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut count = 0usize;

        for point in points {
            if point.cluster == Some(idx) {
                sum_x += point.pos.x;
                sum_y += point.pos.y;
                count += 1;
            }
        }

        if count > 0 {
            cluster.centroid = Coord::new(sum_x / count as f64, sum_y / count as f64);
        }
    }
}

/// True when every centroid moved by at most epsilon since the snapshot.
/// The first cluster over the threshold short-circuits the scan.
pub fn has_converged(old_centroids: &[Coord], clusters: &ClusterSet, epsilon: f64) -> bool {
    old_centroids
        .iter()
        .zip(clusters.iter())
        .all(|(old, cluster)| {
            metrics::displacement_sq(old, &cluster.centroid) <= epsilon * epsilon
        })
}

/// Clamp a requested cluster count into [1, n_points].
///
/// Out-of-range values are corrected and reported, never rejected.
pub fn clamp_k(requested: i64, n_points: usize) -> usize {
    let mut k = requested;
    if k < 1 {
        warn!("{} clusters < 1, using the minimum of 1", requested);
        k = 1;
    }
    if k as usize > n_points {
        warn!(
            "{} clusters > {} points, using the maximum of {}",
            requested, n_points, n_points
        );
        k = n_points as i64;
    }
    k as usize
}

/// Drive assign/update rounds until the centroids settle or the iteration
/// cap is hit.
///
/// Each iteration snapshots the centroids, zeroes the counts, assigns,
/// updates, then checks the new centroids against the snapshot. With
/// `fixed_iterations` set the convergence check is skipped and the loop
/// always runs the full `max_iterations`.
pub fn run_lloyd(points: &mut [Point], clusters: &mut ClusterSet, params: &KMParams) -> RunSummary {
    let mut iteration = 0;

    while iteration < params.max_iterations {
        iteration += 1;

        let old_centroids = clusters.centroids();
        clusters.reset_counts();
        assign(points, clusters);
        update(clusters, points);

        debug!("iteration {}: centroids {:?}", iteration, clusters.centroids());

        if !params.fixed_iterations && has_converged(&old_centroids, clusters, params.epsilon) {
            return RunSummary {
                state: RunState::Converged,
                iterations: iteration,
            };
        }
    }

    RunSummary {
        state: RunState::MaxIterationsReached,
        iterations: iteration,
    }
}
