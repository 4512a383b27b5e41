//! Offline range distinct-value counting.
//!
//! Given an immutable array and a whole batch of inclusive ranges, this crate answers "how many
//! distinct values lie in `values[start..=end]`" for every range in `O((n + q) log n)`:
//! queries are sorted by right endpoint, then a single left-to-right sweep keeps exactly one
//! marker per distinct value (at its most recent occurrence) in a [`Fenwick`] tree, so each
//! query becomes one range sum.
//!
//! For the text problem format and the `dquery` binary, see the `distinct-count-io` crate.
//!
//! ```
//! use distinct_count::{solve, Query};
//!
//! let queries = Query::batch_from_one_based([(1, 5), (2, 4), (3, 5)]).unwrap();
//! assert_eq!(solve(&[1, 1, 2, 1, 3], &queries).unwrap(), vec![3, 2, 3]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod fenwick;
pub mod naive;
mod options;
mod solver;
mod table;
mod types;


pub use error::Error;
pub use fenwick::Fenwick;
pub use options::{DEFAULT_VALUE_LIMIT, SolverOptions};
pub use solver::{Solver, solve};
pub use types::{Query, SweepSummary, TableKind};
