use kmeans2d::{assign, euclidean, ClusterSet, Coord, Point};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_euclidean_symmetric_and_nonnegative(
        ax in -100.0f64..100.0,
        ay in -100.0f64..100.0,
        bx in -100.0f64..100.0,
        by in -100.0f64..100.0,
    ) {
        let a = Coord::new(ax, ay);
        let b = Coord::new(bx, by);

        prop_assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
        prop_assert!(euclidean(&a, &b) >= 0.0);
        prop_assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn prop_assign_picks_nearest_with_lowest_index_ties(
        pts in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 1..40),
        cents in prop::collection::vec((-30.0f64..30.0, -30.0f64..30.0), 1..6),
    ) {
        let mut points: Vec<Point> = pts.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let mut clusters = ClusterSet::from_centroids(
            cents.iter().map(|&(x, y)| Coord::new(x, y)).collect(),
        );

        assign(&mut points, &mut clusters);

        let total: usize = clusters.iter().map(|c| c.point_count).sum();
        prop_assert_eq!(total, points.len());

        for point in &points {
            let assigned = point.cluster.unwrap();
            prop_assert!(assigned < clusters.len());
            let assigned_dist = euclidean(&point.pos, &clusters[assigned].centroid);
            for (idx, cluster) in clusters.iter().enumerate() {
                let dist = euclidean(&point.pos, &cluster.centroid);
                prop_assert!(dist >= assigned_dist);
                if idx < assigned {
                    // Anything before the winner must have been strictly worse.
                    prop_assert!(dist > assigned_dist);
                }
            }
        }
    }
}
