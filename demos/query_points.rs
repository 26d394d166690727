//! Insert random points and list the ones inside a query rectangle.
use quadpoint::prelude::*;
use rand::Rng;

const WORLD: f64 = 200.0;

fn main() {
    let mut rng = rand::rng();
    let mut tree = QuadTree::new(WORLD / 2.0, WORLD / 2.0, WORLD / 2.0, WORLD / 2.0, 4);

    for _ in 0..20_000 {
        let p = Point::new(rng.random_range(0.0001..WORLD), rng.random_range(0.0001..WORLD));
        tree.insert(p).expect("generated point inside world bounds");
    }

    // All points with x strictly in (31, 91) and y strictly in (80.5, 110.7).
    let area = Rect::from_center(61.0, 95.6, 30.0, 15.1);
    let found = tree.query(&area);
    println!("Found {} points in {area:?}:", found.len());
    for p in &found {
        println!("({}, {})", p.x, p.y);
    }
}
