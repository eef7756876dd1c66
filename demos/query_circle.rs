//! Find points within a circular region.
//!
//! The query prunes every cell that the circle's bounding square cannot reach
//! and tests only the points of the remaining leaves.

use quadrant::prelude::*;

fn main() -> Result<(), QuadTreeError> {
    let points = vec![
        Point::new(100.0, 100.0), // Point 0
        Point::new(100.0, 300.0), // Point 1
        Point::new(300.0, 300.0), // Point 2
        Point::new(55.0, 30.0),   // Point 3
    ];
    let tree = QuadTree::build(Bounds::new(0.0, 0.0, 400.0, 400.0), 2, points)?;

    println!("=== Query Circle Example ===\n");

    // Query 1: both bottom-left points are in range
    println!("Query 1: Points within radius 60 of (70, 80):");
    let found = tree.query_circle(Point::new(70.0, 80.0), 60.0);
    println!("  Found {} points: {:?}", found.len(), found);
    assert_eq!(found.len(), 2, "Expected points 0 and 3");
    println!("  ✓ Correct!\n");

    // Query 2: points exactly on the circle are excluded
    println!("Query 2: Points within radius 200 of (100, 100):");
    let found = tree.query_circle(Point::new(100.0, 100.0), 200.0);
    println!("  Found {} points: {:?}", found.len(), found);
    assert!(!found.contains(&&Point::new(100.0, 300.0)), "Point 1 sits exactly 200 away");
    println!("  ✓ Correct!\n");

    // Query 3: the free function form
    println!("Query 3: Points within radius 10 of (200, 200):");
    let found = spherical_region_query(&tree, Point::new(200.0, 200.0), 10.0);
    println!("  Found {} points", found.len());
    assert!(found.is_empty(), "Nothing near the center");
    println!("  ✓ Correct!\n");

    Ok(())
}
