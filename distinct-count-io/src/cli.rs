use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use distinct_count::{Solver, TableKind};

use crate::{Limits, Problem, write_answers};

/// Counts distinct values in ranges of an array, reading the problem from stdin.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dquery", version, about, long_about = None)]
pub struct Args {
    /// Exclusive upper bound on array values; defaults to one past the input limit.
    #[arg(long)]
    pub value_limit: Option<u32>,

    /// Maximum accepted array length.
    #[arg(long)]
    pub max_len: Option<usize>,

    /// How last occurrences are tracked during the sweep.
    #[arg(long, value_enum, default_value_t = Table::Auto)]
    pub table: Table,

    /// Answer every query by brute force instead of the offline sweep.
    #[arg(long)]
    pub naive: bool,

    /// Skip the classic input limits (30 000 values up to 1 000 000, 200 000 queries).
    #[arg(long)]
    pub unlimited: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Auto,
    Dense,
    Sparse,
}

impl From<Table> for TableKind {
    fn from(table: Table) -> Self {
        match table {
            Table::Auto => TableKind::Auto,
            Table::Dense => TableKind::Dense,
            Table::Sparse => TableKind::Sparse,
        }
    }
}

impl Args {
    pub fn limits(&self) -> Limits {
        let mut limits = if self.unlimited {
            Limits::unlimited()
        } else {
            Limits::default()
        };
        if let Some(max_len) = self.max_len {
            limits.max_len = max_len;
        }
        limits
    }

    pub fn solver(&self) -> Result<Solver> {
        let mut options = self.limits().solver_options().with_table(self.table.into());
        if self.value_limit.is_some() {
            options = options.with_value_limit(self.value_limit);
        }
        Solver::new(options).context("invalid solver options")
    }
}

/// Reads a problem from `input`, answers it and writes one answer per line to `output`.
pub fn run(args: &Args, input: impl Read, output: impl Write) -> Result<()> {
    let solver = args.solver()?;
    let problem = Problem::read_from(input, &args.limits()).context("failed to parse input")?;
    let answers = if args.naive {
        problem.solve_naive()
    } else {
        problem.solve(&solver)
    }
    .context("failed to answer queries")?;
    write_answers(output, &answers).context("failed to write answers")
}
