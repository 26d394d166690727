//! Count near-neighbor pairs in a random point cloud, one neighborhood
//! query per point instead of an all-pairs scan. Runs several rounds on
//! the same tree with a clear in between.
use quadpoint::prelude::*;
use rand::Rng;

const WORLD: f64 = 200.0;
const POINTS: usize = 20_000;

fn main() {
    let mut rng = rand::rng();
    let mut tree = QuadTree::new(WORLD / 2.0, WORLD / 2.0, WORLD / 2.0, WORLD / 2.0, 4);
    let mut points = Vec::with_capacity(POINTS);

    for round in 0..5 {
        for _ in 0..POINTS {
            let p = Point::new(rng.random_range(0.0001..WORLD), rng.random_range(0.0001..WORLD));
            tree.insert(p).expect("generated point inside world bounds");
            points.push(p);
        }

        let mut count = 0usize;
        for &p in &points {
            for other in tree.query(&Rect::new(p, 10.0, 10.0)) {
                if p != other && p.distance(other) < 3.0 {
                    count += 1;
                }
            }
        }
        println!("Round {round}: Found {count} overlapping points");

        tree.clear();
        points.clear();
    }
}
