//! End-to-end behavior of the public KD-tree API.

use kdindex::{KdError, KdTree};

const SAMPLE: [[i32; 2]; 7] = [
    [3, 6],
    [17, 15],
    [13, 15],
    [6, 12],
    [9, 1],
    [2, 7],
    [10, 19],
];

fn sample_tree() -> KdTree<i32> {
    let mut tree = KdTree::new(2);
    for p in SAMPLE {
        tree.insert(&p).unwrap();
    }
    tree
}

// === Sample scenario ===

#[test]
fn test_sample_search() {
    let tree = sample_tree();
    assert!(tree.search(&[3, 6]).unwrap());
    assert!(!tree.search(&[7, 8]).unwrap());
}

#[test]
fn test_sample_nearest() {
    let tree = sample_tree();
    assert_eq!(tree.nearest_neighbor(&[7, 8]).unwrap(), &[6, 12]);

    let float_tree =
        KdTree::<f64>::from_points(2, SAMPLE.iter().map(|p| [p[0] as f64, p[1] as f64])).unwrap();
    let (point, dist) = float_tree.nearest_with_distance(&[7.0, 8.0]).unwrap();
    assert_eq!(point, &[6.0, 12.0]);
    approx::assert_relative_eq!(dist.sqrt(), 4.123, epsilon = 1e-3);
}

#[test]
fn test_sample_range() {
    let tree = sample_tree();
    let mut results: Vec<Vec<i32>> = tree
        .range_search(&[5, 5], &[15, 15])
        .unwrap()
        .into_iter()
        .map(|p| p.to_vec())
        .collect();
    results.sort();
    assert_eq!(results, vec![vec![6, 12], vec![13, 15]]);
}

// === Empty tree ===

#[test]
fn test_empty_tree_queries() {
    let tree: KdTree<i32> = KdTree::new(2);
    assert!(!tree.search(&[0, 0]).unwrap());
    assert!(tree.range_search(&[-100, -100], &[100, 100]).unwrap().is_empty());
    assert_eq!(tree.nearest_neighbor(&[0, 0]), Err(KdError::EmptyTree));
}

// === Dimension mismatch ===

#[test]
fn test_dimension_mismatch_rejected_everywhere() {
    let mut tree = sample_tree();
    let before: Vec<Vec<i32>> = tree.iter().map(|p| p.to_vec()).collect();
    let mismatch = KdError::DimensionMismatch {
        expected: 2,
        found: 3,
    };

    assert_eq!(tree.insert(&[1, 2, 3]), Err(mismatch.clone()));
    assert_eq!(tree.search(&[1, 2, 3]), Err(mismatch.clone()));
    assert_eq!(tree.nearest_neighbor(&[1, 2, 3]), Err(mismatch.clone()));
    assert_eq!(tree.range_search(&[1, 2, 3], &[4, 5]), Err(mismatch.clone()));
    assert_eq!(tree.range_search(&[1, 2], &[4, 5, 6]), Err(mismatch));

    let after: Vec<Vec<i32>> = tree.iter().map(|p| p.to_vec()).collect();
    assert_eq!(before, after);
    assert_eq!(tree.height(), 4);
}

#[test]
fn test_error_messages() {
    let tree: KdTree<f32> = KdTree::new(4);
    let err = tree.search(&[1.0]).unwrap_err();
    assert_eq!(err.to_string(), "dimension mismatch: tree has 4 dimensions, got 1");
}

// === Large-magnitude coordinates ===

#[test]
fn test_large_integer_coordinates() {
    let tree = KdTree::<i32>::from_points(2, [[0, 0], [100_000, 0]]).unwrap();
    assert_eq!(tree.nearest_neighbor(&[60_000, 0]).unwrap(), &[100_000, 0]);

    let ranked = tree.k_nearest(&[60_000, 0], 2).unwrap();
    assert_eq!(ranked[0], (&[100_000, 0][..], 1_600_000_000));
    assert_eq!(ranked[1], (&[0, 0][..], 3_600_000_000));

    assert_eq!(tree.within_radius(&[60_000, 0], 45_000).unwrap(), vec![&[100_000, 0][..]]);
    assert!(tree.within_radius(&[0, 0], -5).unwrap().is_empty());
}

// === Degenerate insertion order ===

#[test]
fn test_sorted_insertion_does_not_overflow_stack() {
    const N: i64 = 20_000;
    let tree = KdTree::<i64>::from_points(2, (0..N).map(|i| [i, i])).unwrap();
    assert_eq!(tree.len(), N as usize);
    assert_eq!(tree.height(), N as usize);

    assert!(tree.search(&[N - 1, N - 1]).unwrap());
    assert_eq!(tree.nearest_neighbor(&[N + 10, N + 10]).unwrap(), &[N - 1, N - 1]);
    assert_eq!(tree.nearest_neighbor(&[-5, -5]).unwrap(), &[0, 0]);
    assert_eq!(tree.range_search(&[0, 0], &[N, N]).unwrap().len(), N as usize);
    assert_eq!(tree.k_nearest(&[N, N], 3).unwrap().len(), 3);
    assert_eq!(tree.within_radius(&[50, 50], 2).unwrap().len(), 3);

    // Teardown of a list-shaped tree must not recurse either.
    drop(tree);
}

#[test]
fn test_reverse_sorted_insertion() {
    let tree = KdTree::<i32>::from_points(1, (0..20_000).rev().map(|i| [i])).unwrap();
    assert_eq!(tree.height(), 20_000);
    assert_eq!(tree.nearest_neighbor(&[-3]).unwrap(), &[0]);
    assert_eq!(tree.range_search(&[10], &[19]).unwrap().len(), 10);
}

// === Higher dimensions ===

#[test]
fn test_five_dimensional_tree() {
    let mut tree = KdTree::<u32>::new(5);
    for i in 0..200u32 {
        let p = [i % 7, i % 11, i % 13, i % 17, i % 19];
        tree.insert(&p).unwrap();
    }
    assert_eq!(tree.dimensions(), 5);
    assert!(tree.search(&[3, 3, 3, 3, 3]).unwrap());
    assert_eq!(
        tree.nearest_neighbor(&[3, 3, 3, 3, 3]).unwrap(),
        &[3, 3, 3, 3, 3]
    );
}
