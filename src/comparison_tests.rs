//! Comparison tests between QuadTree range queries and a brute-force
//! linear filter over the same points

#[cfg(test)]
mod tests {
    use crate::{Point, QuadTree, Rect};
    use rand::{Rng, SeedableRng};

    /// Brute-force oracle: the exact set a range query must return.
    fn linear_filter(points: &[Point], area: &Rect) -> Vec<Point> {
        points.iter().copied().filter(|&p| area.contains(p)).collect()
    }

    /// Sort into a canonical order so result sets can be compared
    /// independent of tree traversal order.
    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }

    /// Fills a tree over [0, extent] x [0, extent] with `count` random
    /// points, returning the tree and the flat point list for the oracle.
    fn random_tree(seed: u64, count: usize, extent: f64, capacity: usize) -> (QuadTree, Vec<Point>) {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let half = extent / 2.0;
        let mut tree = QuadTree::new(half, half, half, half, capacity);
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            // Open interval keeps every sample strictly inside the root.
            let p = Point::new(
                rng.random_range(0.001..extent - 0.001),
                rng.random_range(0.001..extent - 0.001),
            );
            tree.insert(p).expect("random point inside root bounds");
            points.push(p);
        }
        (tree, points)
    }

    #[test]
    fn test_query_matches_linear_filter_small() {
        let (tree, points) = random_tree(42, 200, 100.0, 4);
        let area = Rect::from_center(50.0, 50.0, 20.0, 20.0);
        assert_eq!(sorted(tree.query(&area)), sorted(linear_filter(&points, &area)));
    }

    #[test]
    fn test_query_matches_linear_filter_many_areas() {
        let (tree, points) = random_tree(7, 2000, 1000.0, 4);
        let mut rng = rand::rngs::StdRng::seed_from_u64(1234);
        for _ in 0..100 {
            let area = Rect::from_center(
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..1000.0),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
            );
            assert_eq!(
                sorted(tree.query(&area)),
                sorted(linear_filter(&points, &area)),
                "range query diverged from brute force for {area:?}"
            );
        }
    }

    #[test]
    fn test_query_matches_linear_filter_tiny_capacity() {
        // Capacity 1 forces deep subdivision.
        let (tree, points) = random_tree(99, 500, 100.0, 1);
        let mut rng = rand::rngs::StdRng::seed_from_u64(5678);
        for _ in 0..50 {
            let area = Rect::from_center(
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..20.0),
                rng.random_range(0.0..20.0),
            );
            assert_eq!(
                sorted(tree.query(&area)),
                sorted(linear_filter(&points, &area)),
                "range query diverged from brute force for {area:?}"
            );
        }
    }

    #[test]
    fn test_each_inserted_point_found_exactly_once() {
        let (tree, points) = random_tree(3, 1000, 500.0, 4);
        for &p in &points {
            let area = Rect::new(p, 1.0, 1.0);
            let hits = tree.query(&area).iter().filter(|&&q| q == p).count();
            // Duplicate samples are possible in principle; every copy is a
            // distinct stored point and each contributes one hit.
            let copies = points.iter().filter(|&&q| q == p).count();
            assert_eq!(hits, copies, "point {p:?} not found exactly once");
        }
    }

    #[test]
    fn test_whole_region_query_returns_everything() {
        let (tree, points) = random_tree(11, 300, 200.0, 4);
        let area = Rect::from_center(100.0, 100.0, 101.0, 101.0);
        assert_eq!(tree.query(&area).len(), points.len());
        assert_eq!(sorted(tree.query(&area)), sorted(points));
    }

    #[test]
    fn test_clear_and_reinsert_yields_same_results() {
        let (mut tree, points) = random_tree(21, 400, 100.0, 4);
        let area = Rect::from_center(50.0, 50.0, 30.0, 30.0);
        let before = sorted(tree.query(&area));

        tree.clear();
        assert!(tree.query(&area).is_empty());

        for &p in &points {
            tree.insert(p).expect("reinserted point inside root bounds");
        }
        assert_eq!(sorted(tree.query(&area)), before);
    }
}
