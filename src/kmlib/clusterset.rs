use crate::kmlib::Coord;
use rand::Rng;
use std::ops::{Index, IndexMut, RangeInclusive};

/// Centroid coordinates are seeded uniformly from the integers in this
/// range, independently per axis.
const INIT_RANGE: RangeInclusive<i32> = -30..=30;

/// One cluster: its current centroid and how many points the most recent
/// assignment pass gave it.
#[derive(Clone, Debug)]
pub struct Cluster {
    pub centroid: Coord,
    pub point_count: usize,
}

/// The K clusters of a run. K is fixed at initialization; points refer to
/// clusters by index into this set, and those indices are only meaningful
/// for the run that created it.
#[derive(Clone, Debug)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
}

impl ClusterSet {
    /// Create K clusters with randomly drawn centroids and zeroed counts.
    ///
    /// The generator is injected so runs can be made deterministic with a
    /// fixed seed. Distinct centroids are not guaranteed.
    pub fn initialize<R: Rng>(k: usize, rng: &mut R) -> Self {
        let clusters = (0..k)
            .map(|_| Cluster {
                centroid: Coord::new(
                    rng.gen_range(INIT_RANGE) as f64,
                    rng.gen_range(INIT_RANGE) as f64,
                ),
                point_count: 0,
            })
            .collect();
        Self { clusters }
    }

    /// Build a set from known centroid positions.
    pub fn from_centroids(centroids: Vec<Coord>) -> Self {
        let clusters = centroids
            .into_iter()
            .map(|centroid| Cluster {
                centroid,
                point_count: 0,
            })
            .collect();
        Self { clusters }
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Snapshot of every centroid position, taken before an iteration so
    /// the convergence check has an "old" side to compare against.
    pub fn centroids(&self) -> Vec<Coord> {
        self.clusters.iter().map(|c| c.centroid).collect()
    }

    /// Zero every count. Must run immediately before each assignment pass,
    /// otherwise counts accumulate across iterations.
    pub fn reset_counts(&mut self) {
        for cluster in &mut self.clusters {
            cluster.point_count = 0;
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cluster> {
        self.clusters.iter_mut()
    }
}

impl Index<usize> for ClusterSet {
    type Output = Cluster;

    fn index(&self, idx: usize) -> &Cluster {
        &self.clusters[idx]
    }
}

impl IndexMut<usize> for ClusterSet {
    fn index_mut(&mut self, idx: usize) -> &mut Cluster {
        &mut self.clusters[idx]
    }
}
