//! Locate the leaf cell that covers a point.

use quadrant::prelude::*;

fn main() -> Result<(), QuadTreeError> {
    let points = vec![
        Point::new(100.0, 100.0),
        Point::new(100.0, 300.0),
        Point::new(300.0, 300.0),
        Point::new(55.0, 30.0),
        Point::new(85.0, 28.0),
        Point::new(90.0, 34.0),
        Point::new(95.0, 30.0),
    ];
    let tree = QuadTree::build(Bounds::new(0.0, 0.0, 400.0, 400.0), 2, points)?;

    println!("=== Search Example ===\n");
    for query in [Point::new(95.0, 95.0), Point::new(50.0, 50.0), Point::new(-2.0, 350.0)] {
        match search(query, &tree) {
            Some(leaf) => println!(
                "({}, {}) -> cell {:?} holding {} point(s)",
                query.x,
                query.y,
                leaf.bounds(),
                leaf.len()
            ),
            None => println!("({}, {}) -> outside the tree", query.x, query.y),
        }
    }

    // Tree shape is rejected up front when it can never terminate
    let stacked = vec![Point::new(0.0, 0.0); 3];
    match QuadTree::build(Bounds::new(0.0, 0.0, 10.0, 10.0), 2, stacked) {
        Ok(_) => println!("\nUnexpectedly built a tree from stacked points"),
        Err(err) => println!("\nStacked points rejected: {err}"),
    }

    Ok(())
}
