//! Walk every cell of a tree, the way a renderer would draw it.

use quadrant::prelude::*;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), QuadTreeError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let points: Vec<Point> = (0..40)
        .map(|_| Point::new(rng.random_range(0.0..64.0), rng.random_range(0.0..64.0)))
        .collect();

    let config = QuadTreeConfig::default().with_capacity(3);
    let tree = QuadTree::with_config(Bounds::new(0.0, 0.0, 64.0, 64.0), config, points)?;

    println!(
        "{} nodes, {} leaves, depth {}\n",
        tree.node_count(),
        tree.leaf_count(),
        tree.depth()
    );

    for (node, depth) in tree.nodes() {
        let b = node.bounds();
        let kind = if node.is_leaf() { "leaf" } else { "cell" };
        println!(
            "{:indent$}{} [{}, {}] {}x{} with {} point(s)",
            "",
            kind,
            b.x,
            b.y,
            b.w,
            b.h,
            node.len(),
            indent = depth * 2
        );
    }

    Ok(())
}
