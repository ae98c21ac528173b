//! Property-based tests for sparse matrix storage, arithmetic and the text format
//!
//! Arithmetic results are checked against a dense baseline computed from
//! `get_element`.

use proptest::prelude::*;
use spmat_core::{format, Entry, ErrorKind, SparseMatrix};

// ============================================================================
// Test Utilities
// ============================================================================

type Triples = Vec<(usize, usize, i64)>;

/// Generate entry triples for a `nrows` x `ncols` matrix; zeros and repeated
/// positions are included on purpose
fn triples_strategy(nrows: usize, ncols: usize, max_nnz: usize) -> impl Strategy<Value = Triples> {
    prop::collection::vec((0..nrows, 0..ncols, -50i64..50), 0..=max_nnz)
}

fn build(nrows: usize, ncols: usize, triples: &Triples) -> SparseMatrix {
    let mut m = SparseMatrix::new(nrows, ncols);
    for &(r, c, v) in triples {
        m.set_element(r, c, v).unwrap();
    }
    m
}

fn dense(m: &SparseMatrix) -> Vec<Vec<i64>> {
    let (rows, cols) = m.dimensions();
    (0..rows)
        .map(|r| (0..cols).map(|c| m.get_element(r, c).unwrap()).collect())
        .collect()
}

fn assert_no_zeros(m: &SparseMatrix) -> Result<(), TestCaseError> {
    for entry in m.iter() {
        prop_assert_ne!(entry.value, 0);
        prop_assert!(entry.row < m.rows() && entry.col < m.cols());
    }
    Ok(())
}

// ============================================================================
// Storage Properties
// ============================================================================

proptest! {
    /// Property: get returns the last value set, or 0
    #[test]
    fn prop_get_returns_last_set(triples in triples_strategy(6, 7, 40)) {
        let m = build(6, 7, &triples);
        let mut expected = vec![vec![0i64; 7]; 6];
        for &(r, c, v) in &triples {
            expected[r][c] = v;
        }
        prop_assert_eq!(dense(&m), expected);
    }

    /// Property: no zero value is ever stored
    #[test]
    fn prop_storage_never_holds_zero(
        a in triples_strategy(5, 5, 30),
        b in triples_strategy(5, 5, 30),
    ) {
        let ma = build(5, 5, &a);
        let mb = build(5, 5, &b);
        assert_no_zeros(&ma)?;
        assert_no_zeros(&ma.add(&mb).unwrap())?;
        assert_no_zeros(&ma.subtract(&mb).unwrap())?;
        assert_no_zeros(&ma.subtract(&ma).unwrap())?;
        assert_no_zeros(&ma.multiply(&mb).unwrap())?;
    }

    /// Property: iteration yields each stored position exactly once
    #[test]
    fn prop_iter_unique_positions(triples in triples_strategy(8, 8, 50)) {
        let m = build(8, 8, &triples);
        let mut positions: Vec<(usize, usize)> = m.iter().map(|e| (e.row, e.col)).collect();
        positions.sort_unstable();
        positions.dedup();
        prop_assert_eq!(positions.len(), m.nnz());
    }
}

// ============================================================================
// Arithmetic Properties
// ============================================================================

proptest! {
    /// Property: addition is commutative
    #[test]
    fn prop_add_commutative(
        a in triples_strategy(6, 4, 20),
        b in triples_strategy(6, 4, 20),
    ) {
        let (ma, mb) = (build(6, 4, &a), build(6, 4, &b));
        prop_assert_eq!(ma.add(&mb).unwrap(), mb.add(&ma).unwrap());
    }

    /// Property: a - b == a + (-1 * b)
    #[test]
    fn prop_subtract_is_add_of_negation(
        a in triples_strategy(4, 6, 20),
        b in triples_strategy(4, 6, 20),
    ) {
        let (ma, mb) = (build(4, 6, &a), build(4, 6, &b));
        prop_assert_eq!(
            ma.subtract(&mb).unwrap(),
            ma.add(&mb.scaled_by(-1).unwrap()).unwrap()
        );
    }

    /// Property: multiplication matches the dense product
    #[test]
    fn prop_multiply_matches_dense(
        a in triples_strategy(4, 5, 15),
        b in triples_strategy(5, 3, 15),
    ) {
        let (ma, mb) = (build(4, 5, &a), build(5, 3, &b));
        let (da, db) = (dense(&ma), dense(&mb));
        let product = ma.multiply(&mb).unwrap();
        prop_assert_eq!(product.dimensions(), (4, 3));
        for i in 0..4 {
            for j in 0..3 {
                let expected: i64 = (0..5).map(|k| da[i][k] * db[k][j]).sum();
                prop_assert_eq!(product.get_element(i, j).unwrap(), expected);
            }
        }
    }

    /// Property: multiplying by the identity returns an equal matrix
    #[test]
    fn prop_multiply_identity(a in triples_strategy(5, 3, 15)) {
        let m = build(5, 3, &a);
        prop_assert_eq!(m.multiply(&SparseMatrix::identity(3)).unwrap(), m.clone());
        prop_assert_eq!(SparseMatrix::identity(5).multiply(&m).unwrap(), m);
    }

    /// Property: multiplication is associative
    #[test]
    fn prop_multiply_associative(
        a in triples_strategy(3, 4, 10),
        b in triples_strategy(4, 2, 8),
        c in triples_strategy(2, 5, 10),
    ) {
        let (ma, mb, mc) = (build(3, 4, &a), build(4, 2, &b), build(2, 5, &c));
        let left = ma.multiply(&mb).unwrap().multiply(&mc).unwrap();
        let right = ma.multiply(&mb.multiply(&mc).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Property: shapes that differ are rejected
    #[test]
    fn prop_dimension_mismatch(rows in 1usize..6, cols in 1usize..6, extra in 1usize..3) {
        let a = SparseMatrix::new(rows, cols);
        let b = SparseMatrix::new(rows + extra, cols);
        prop_assert_eq!(a.add(&b).unwrap_err().kind(), ErrorKind::DimensionMismatch);
        prop_assert_eq!(a.subtract(&b).unwrap_err().kind(), ErrorKind::DimensionMismatch);
        let c = SparseMatrix::new(cols + extra, rows);
        prop_assert_eq!(a.multiply(&c).unwrap_err().kind(), ErrorKind::DimensionMismatch);
        prop_assert!(a.multiply(&SparseMatrix::new(cols, rows)).is_ok());
    }
}

// ============================================================================
// Text Format Properties
// ============================================================================

proptest! {
    /// Property: parse(serialize(m)) == m, including the all-zero matrix
    #[test]
    fn prop_text_roundtrip(
        rows in 0usize..8,
        cols in 0usize..8,
        raw in prop::collection::vec((0usize..8, 0usize..8, -1000i64..1000), 0..30),
    ) {
        let entries = raw
            .into_iter()
            .filter(|&(r, c, _)| r < rows && c < cols)
            .map(|(r, c, v)| Entry::new(r, c, v));
        let m = SparseMatrix::from_entries(rows, cols, entries).unwrap();
        let text = format::to_text(&m);
        prop_assert_eq!(format::parse_matrix(&text).unwrap(), m);
    }

    /// Property: serialization is sorted and independent of insertion order
    #[test]
    fn prop_text_is_deterministic(triples in triples_strategy(6, 6, 25)) {
        let forward = build(6, 6, &triples);
        let text = format::to_text(&forward);

        let mut reversed = SparseMatrix::new(6, 6);
        for entry in forward.sorted_entries().into_iter().rev() {
            reversed.set_element(entry.row, entry.col, entry.value).unwrap();
        }
        prop_assert_eq!(&format::to_text(&reversed), &text);

        let parsed = format::parse_str(&text).unwrap();
        let positions: Vec<(usize, usize)> = parsed.entries.iter().map(|e| (e.row, e.col)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted);
    }
}

#[test]
fn test_concrete_scenario() {
    let a = format::parse_matrix("rows=2\ncols=2\n(0, 0, 1)\n(1, 1, 2)\n").unwrap();
    let b = format::parse_matrix("rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n").unwrap();

    assert_eq!(
        format::to_text(&a.add(&b).unwrap()),
        "rows=2\ncols=2\n(0, 0, 4)\n(0, 1, 4)\n(1, 1, 2)\n"
    );
    assert_eq!(
        format::to_text(&a.multiply(&b).unwrap()),
        "rows=2\ncols=2\n(0, 0, 3)\n(0, 1, 4)\n"
    );
}

#[test]
fn test_malformed_documents() {
    let garbage = format::parse_str("rows=3\ncols=3\ngarbage\n").unwrap_err();
    assert_eq!(garbage.kind(), ErrorKind::MalformedFile);

    let out_of_range = format::parse_str("rows=3\ncols=3\n(5, 0, 1)\n").unwrap_err();
    assert_eq!(out_of_range.kind(), ErrorKind::IndexOutOfRange);
}
