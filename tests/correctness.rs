use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use trans::blocked::{Strategy, transpose_blocked};
use trans::registry::{Registry, SUBMISSION_DESC};
use trans::{TransposeError, is_transpose, transpose_row_scan, transpose_submit, try_transpose};

fn random_matrix(m: usize, n: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m * n).map(|_| rng.gen_range(-1_000_000..1_000_000)).collect()
}

fn row_scan(m: usize, n: usize, a: &[i32]) -> Vec<i32> {
    let mut b = vec![0; m * n];
    transpose_row_scan(m, n, a, &mut b);
    b
}

fn submit(m: usize, n: usize, a: &[i32]) -> Vec<i32> {
    let mut b = vec![0; m * n];
    transpose_submit(m, n, a, &mut b);
    b
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn test_2x2_uses_fallback() {
    let a = vec![1, 2, 3, 4];
    let mut b = vec![0; 4];

    let strategy = try_transpose(2, 2, &a, &mut b).unwrap();

    assert_eq!(strategy, Strategy::RowScan);
    assert_eq!(b, vec![1, 3, 2, 4]);
}

#[test]
fn test_rectangular_untuned_shapes() {
    let shapes = [(1, 1), (1, 7), (7, 1), (3, 5), (32, 64), (61, 61)];

    for (m, n) in shapes {
        let a = random_matrix(m, n, (m * 100 + n) as u64);
        let b = submit(m, n, &a);
        assert!(is_transpose(m, n, &a, &b), "{}x{}", n, m);
    }
}

// ============================================================
// Tuned shapes
// ============================================================

#[test]
fn test_tuned_shapes_match_row_scan() {
    for shape in Strategy::tuned_shapes() {
        let (m, n) = (shape.cols, shape.rows);
        assert!(matches!(Strategy::for_shape(m, n), Strategy::Blocked(_)));

        let a = random_matrix(m, n, 7);
        assert_eq!(submit(m, n, &a), row_scan(m, n, &a), "shape {}", shape);
    }
}

#[test]
fn test_32x32() {
    let a: Vec<i32> = (0..32 * 32).collect();
    let b = submit(32, 32, &a);
    assert!(is_transpose(32, 32, &a, &b));
    assert_eq!(b, row_scan(32, 32, &a));
}

#[test]
fn test_64x64() {
    let a: Vec<i32> = (0..64 * 64).collect();
    let b = submit(64, 64, &a);
    assert!(is_transpose(64, 64, &a, &b));
    assert_eq!(b, row_scan(64, 64, &a));
}

#[test]
fn test_67x61() {
    let (m, n) = (61, 67);
    let a: Vec<i32> = (0..(m * n) as i32).collect();
    let b = submit(m, n, &a);
    assert!(is_transpose(m, n, &a, &b));
    assert_eq!(b, row_scan(m, n, &a));
}

#[test]
fn test_67x61_ragged_edges() {
    // Row 66 and column 60 lie outside every full 20x20 block.
    let (m, n) = (61, 67);
    let a = random_matrix(m, n, 42);
    let mut b = vec![i32::MIN; m * n];
    transpose_submit(m, n, &a, &mut b);

    for j in 0..m {
        assert_eq!(b[j * n + 66], a[66 * m + j], "last row, column {}", j);
    }
    for i in 0..n {
        assert_eq!(b[60 * n + i], a[i * m + 60], "last column, row {}", i);
    }
    assert!(!b.contains(&i32::MIN));
}

// ============================================================
// Diagonal deferral
// ============================================================

#[test]
fn test_diagonal_markers() {
    for size in [32, 64] {
        let mut a = vec![0; size * size];
        for i in 0..size {
            a[i * size + i] = 1000 + i as i32;
        }
        let mut b = vec![-1; size * size];
        transpose_submit(size, size, &a, &mut b);

        for i in 0..size {
            assert_eq!(b[i * size + i], 1000 + i as i32, "size {} diag {}", size, i);
        }
        assert!(is_transpose(size, size, &a, &b));
    }
}

#[test]
fn test_blocked_every_element_written() {
    for shape in Strategy::tuned_shapes() {
        let (m, n) = (shape.cols, shape.rows);
        let config = Strategy::for_shape_strict(m, n).unwrap();
        let a = random_matrix(m, n, 3);
        let mut b = vec![i32::MIN; m * n];
        transpose_blocked(m, n, &a, &mut b, &config);
        assert!(is_transpose(m, n, &a, &b), "shape {}", shape);
    }
}

// ============================================================
// Properties
// ============================================================

#[test]
fn test_involution() {
    let shapes = [(32, 32), (64, 64), (61, 67), (67, 61), (5, 9)];

    for (m, n) in shapes {
        let a = random_matrix(m, n, 11);
        let b = submit(m, n, &a);
        let back = submit(n, m, &b);
        assert_eq!(back, a, "{}x{}", n, m);
    }
}

#[test]
fn test_random_round_trip() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let m = rng.gen_range(1..80);
        let n = rng.gen_range(1..80);
        let a = random_matrix(m, n, rng.r#gen());
        let b = submit(m, n, &a);
        assert!(is_transpose(m, n, &a, &b), "{}x{}", n, m);
    }
}

// ============================================================
// Checked entry point
// ============================================================

#[test]
fn test_try_transpose_errors() {
    let a = vec![0; 6];
    let mut b = vec![0; 6];

    assert_eq!(
        try_transpose(0, 6, &a, &mut b),
        Err(TransposeError::ZeroDimension { m: 0, n: 6 })
    );
    assert_eq!(
        try_transpose(2, 2, &a, &mut b),
        Err(TransposeError::LengthMismatch { matrix: "A", expected: 4, got: 6 })
    );

    let mut short = vec![0; 5];
    let err = try_transpose(3, 2, &a, &mut short).unwrap_err();
    assert_eq!(err.to_string(), "B: expected 6 elements, got 5");
}

#[test]
fn test_try_transpose_overflowing_dimensions() {
    let a: Vec<i32> = Vec::new();
    let mut b: Vec<i32> = Vec::new();
    let huge = usize::MAX / 2 + 1;

    assert_eq!(
        try_transpose(huge, 2, &a, &mut b),
        Err(TransposeError::DimensionOverflow { m: huge, n: 2 })
    );
    assert_eq!(
        try_transpose(3, usize::MAX, &a, &mut b),
        Err(TransposeError::DimensionOverflow { m: 3, n: usize::MAX })
    );
}

#[test]
fn test_try_transpose_reports_strategy() {
    let a: Vec<i32> = (0..64 * 64).collect();
    let mut b = vec![0; 64 * 64];
    let strategy = try_transpose(64, 64, &a, &mut b).unwrap();
    assert_eq!(strategy.label(), "4x4 blocks, cols-outer, deferred diagonal");
    assert!(is_transpose(64, 64, &a, &b));
}

#[test]
#[should_panic(expected = "B: expected")]
fn test_submit_panics_on_short_output() {
    let a = vec![0; 32 * 32];
    let mut b = vec![0; 10];
    transpose_submit(32, 32, &a, &mut b);
}

// ============================================================
// Registry
// ============================================================

#[test]
fn test_registered_functions_pass_on_tuned_shapes() {
    let registry = Registry::with_defaults();
    assert_eq!(registry.len(), 2);

    for shape in Strategy::tuned_shapes() {
        let (m, n) = (shape.cols, shape.rows);
        let a = random_matrix(m, n, 5);
        for (desc, ok) in registry.check_all(m, n, &a) {
            assert!(ok, "{} failed on {}", desc, shape);
        }
    }
}

#[test]
fn test_registry_finds_submission() {
    let registry = Registry::with_defaults();
    let f = registry.find(SUBMISSION_DESC).unwrap();
    let a = vec![1, 2, 3, 4];
    let mut b = vec![0; 4];
    f(2, 2, &a, &mut b);
    assert_eq!(b, vec![1, 3, 2, 4]);
}
