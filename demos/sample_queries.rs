//! Builds a small 2D tree and prints membership, nearest-neighbor, and range
//! query results.
//!
//! Run with: cargo run --example sample_queries
//! Set `RUST_LOG=kdindex=trace` to watch the traversals.

use kdindex::{KdTree, Result};
use tracing_subscriber::EnvFilter;

fn format_point(point: &[i32]) -> String {
    let coords: Vec<String> = point.iter().map(i32::to_string).collect();
    format!("({})", coords.join(","))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = KdTree::<i32>::new(2);
    for point in [[3, 6], [17, 15], [13, 15], [6, 12], [9, 1], [2, 7], [10, 19]] {
        tree.insert(&point)?;
    }

    for query in [[3, 6], [7, 8]] {
        let found = if tree.search(&query)? {
            "Found"
        } else {
            "Not Found"
        };
        println!("Search for {}: {}", format_point(&query), found);
    }

    let nearest = tree.nearest_neighbor(&[7, 8])?;
    println!("Nearest neighbor to (7,8): {}", format_point(nearest));

    println!("Points in range ([5,5], [15,15]):");
    for point in tree.range_search(&[5, 5], &[15, 15])? {
        println!("{}", format_point(point));
    }

    Ok(())
}
