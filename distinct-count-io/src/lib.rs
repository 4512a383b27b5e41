//! Text front end for the `distinct-count` crate.
//!
//! The core crate works on parsed arrays and queries. This crate provides the pieces around it
//! that a command-line solver needs:
//!
//! - A tokenizer for whitespace-separated unsigned integers
//! - A validating parser for the problem format (array, then 1-based inclusive ranges)
//! - Buffered answer output, one line per query in submission order
//! - The `dquery` binary (see [`cli`])
//!
//! ```
//! use distinct_count::Solver;
//! use distinct_count_io::{Limits, Problem, format_answers};
//!
//! let problem = Problem::parse(b"5\n1 1 2 1 3\n3\n1 5\n2 4\n3 5\n", &Limits::default()).unwrap();
//! let answers = problem.solve(&Solver::default()).unwrap();
//! assert_eq!(format_answers(&answers), "3\n2\n3\n");
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

pub mod cli;
mod error;
mod limits;
mod output;
mod problem;
mod tokens;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use limits::Limits;
pub use output::{format_answers, write_answers};
pub use problem::Problem;
pub use tokens::Tokens;
