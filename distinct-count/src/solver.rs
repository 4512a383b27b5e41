use alloc::vec::Vec;

use crate::fenwick::Fenwick;
use crate::table::LastOccurrence;
use crate::{Error, Query, SolverOptions, SweepSummary, TableKind};

/// Offline range distinct-count engine.
///
/// A `Solver` only holds its options. Every call to [`Solver::solve`] builds a fresh Fenwick
/// tree and last-occurrence table, drives them through one left-to-right sweep and drops them,
/// so a single `Solver` can be shared (or cloned) across threads that solve independent inputs.
///
/// ```
/// use distinct_count::{Query, Solver, SolverOptions};
///
/// let solver = Solver::new(SolverOptions::new()).unwrap();
/// let values = [1, 2, 1, 3];
/// let queries = [
///     Query::new(0, 3, 0),
///     Query::new(1, 2, 1),
///     Query::new(0, 0, 2),
///     Query::new(2, 3, 3),
/// ];
/// assert_eq!(solver.solve(&values, &queries).unwrap(), vec![3, 2, 1, 2]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    options: SolverOptions,
}

impl Solver {
    /// Creates a solver, rejecting inconsistent options up front.
    pub fn new(options: SolverOptions) -> Result<Self, Error> {
        options.validate()?;
        dc_debug!(
            value_limit = ?options.value_limit,
            max_len = ?options.max_len,
            table = ?options.table,
            "Solver::new"
        );
        Ok(Self { options })
    }

    /// The options this solver was built with.
    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Answers every query; `results[q.slot]` is the number of distinct values in
    /// `values[q.start..=q.end]`.
    ///
    /// The whole input is checked before the sweep starts: on error, no answer is produced.
    pub fn solve(&self, values: &[u32], queries: &[Query]) -> Result<Vec<u32>, Error> {
        let mut out = Vec::new();
        self.solve_into(values, queries, &mut out)?;
        Ok(out)
    }

    /// Like [`Solver::solve`], but writes into `out` (cleared and resized to `queries.len()`)
    /// and reports what the sweep did.
    ///
    /// `out` is left untouched when the input is rejected.
    pub fn solve_into(
        &self,
        values: &[u32],
        queries: &[Query],
        out: &mut Vec<u32>,
    ) -> Result<SweepSummary, Error> {
        check_values(values, &self.options)?;
        check_queries(values.len(), queries)?;

        let table = match (self.options.table_for(values.len()), self.options.value_limit) {
            (TableKind::Dense, Some(limit)) => LastOccurrence::dense(limit),
            _ => LastOccurrence::sparse(values.len()),
        };
        dc_trace!(table = ?table.kind(), len = values.len(), "Solver::solve_into table");

        out.clear();
        out.resize(queries.len(), 0);

        let mut order = queries.to_vec();
        // Same-`end` queries see the same sweep state, so tie order does not matter.
        order.sort_unstable_by_key(|q| q.end);

        let mut sweep = Sweep::new(values, &order, table);
        while sweep.phase() == Phase::Sweeping {
            sweep.advance(out);
        }

        let summary = sweep.summary();
        dc_debug!(
            len = values.len(),
            queries = queries.len(),
            positions_swept = summary.positions_swept,
            stopped_early = summary.stopped_early(values.len()),
            "Solver::solve_into done"
        );
        Ok(summary)
    }
}

/// Solves with [`SolverOptions::new`] (values must be `< 1_000_000`).
pub fn solve(values: &[u32], queries: &[Query]) -> Result<Vec<u32>, Error> {
    Solver::new(SolverOptions::new())?.solve(values, queries)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Sweeping,
    Done,
}

/// One forward pass over `values`.
///
/// Invariant between steps: position `p < self.position` holds 1 in `markers` iff `p` is the
/// last occurrence of `values[p]` within `values[..self.position]`, 0 otherwise.
struct Sweep<'a> {
    values: &'a [u32],
    order: &'a [Query], // sorted by `end`
    markers: Fenwick,
    last: LastOccurrence,
    position: usize,
    next_query: usize,
}

impl<'a> Sweep<'a> {
    fn new(values: &'a [u32], order: &'a [Query], last: LastOccurrence) -> Self {
        Self {
            values,
            order,
            markers: Fenwick::new(values.len()),
            last,
            position: 0,
            next_query: 0,
        }
    }

    fn phase(&self) -> Phase {
        if self.next_query < self.order.len() && self.position < self.values.len() {
            Phase::Sweeping
        } else {
            Phase::Done
        }
    }

    /// Moves the active marker of `values[position]` to `position`, then answers every query
    /// ending here.
    fn advance(&mut self, out: &mut [u32]) {
        let position = self.position;
        let value = self.values[position];
        if let Some(prev) = self.last.replace(value, position) {
            self.markers.add(prev, -1);
        }
        self.markers.add(position, 1);

        let order = self.order;
        while let Some(&query) = order.get(self.next_query) {
            debug_assert!(
                query.end >= position,
                "query ending at {} was skipped by the sweep (position={position})",
                query.end
            );
            if query.end != position {
                break;
            }
            let count = self.markers.range_sum(query.start, position);
            debug_assert!(count >= 1 && count as usize <= query.width());
            out[query.slot] = count as u32;
            self.next_query += 1;
        }

        self.position += 1;
    }

    fn summary(&self) -> SweepSummary {
        SweepSummary {
            positions_swept: self.position,
            queries_answered: self.next_query,
            table: self.last.kind(),
        }
    }
}

/// Hard ceiling on the array length: answers are reported as `u32`.
const LEN_CEILING: usize = u32::MAX as usize;

pub(crate) fn check_len(len: usize, max_len: Option<usize>) -> Result<(), Error> {
    let max_len = max_len.map_or(LEN_CEILING, |m| m.min(LEN_CEILING));
    if len > max_len {
        dc_warn!(len, max_len, "array too long");
        return Err(Error::CapacityExceeded { len, max_len });
    }
    Ok(())
}

fn check_values(values: &[u32], options: &SolverOptions) -> Result<(), Error> {
    check_len(values.len(), options.max_len)?;
    if let Some(limit) = options.value_limit {
        if let Some(position) = values.iter().position(|&v| v >= limit) {
            let value = values[position];
            dc_warn!(position, value, limit, "value outside the domain");
            return Err(Error::ValueOutOfDomain {
                position,
                value,
                limit,
            });
        }
    }
    Ok(())
}

/// Checks ranges against `len` and that the slots are exactly `0..queries.len()`.
pub(crate) fn check_queries(len: usize, queries: &[Query]) -> Result<(), Error> {
    let count = queries.len();
    let mut used = alloc::vec![false; count];
    for q in queries {
        let slot = q.slot;
        if slot >= count {
            return Err(Error::SlotOutOfBounds { slot, count });
        }
        if core::mem::replace(&mut used[slot], true) {
            return Err(Error::DuplicateSlot { slot });
        }
        if q.start > q.end {
            return Err(Error::InvalidRange {
                slot,
                start: q.start,
                end: q.end,
            });
        }
        if q.end >= len {
            return Err(Error::RangeOutOfBounds {
                slot,
                end: q.end,
                len,
            });
        }
    }
    Ok(())
}
