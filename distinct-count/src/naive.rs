//! Brute-force reference answers.
//!
//! `O(q * n log n)`: every query collects its slice into an ordered set. Slow, but simple
//! enough to trust, which makes it the oracle for tests and benchmarks.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::solver::{check_len, check_queries};
use crate::{Error, Query};

/// Answers every query independently; `results[q.slot]` is the number of distinct values in
/// `values[q.start..=q.end]`.
///
/// Applies the same range and slot checks as [`crate::Solver::solve`]. There is no value
/// domain, so any `u32` is accepted.
pub fn solve(values: &[u32], queries: &[Query]) -> Result<Vec<u32>, Error> {
    check_len(values.len(), None)?;
    check_queries(values.len(), queries)?;

    let mut out = alloc::vec![0u32; queries.len()];
    let mut seen: BTreeSet<u32> = BTreeSet::new();
    for q in queries {
        seen.clear();
        seen.extend(&values[q.start..=q.end]);
        out[q.slot] = seen.len() as u32;
    }
    Ok(out)
}
