use std::io::Read;

use distinct_count::{Query, Solver, naive};

use crate::{Limits, ParseError, Tokens};

/// A parsed problem: the array and its queries (0-based, slots in submission order).
///
/// Text format, whitespace separated:
///
/// ```text
/// n
/// a_1 ... a_n
/// q
/// i_1 j_1
/// ...
/// i_q j_q
/// ```
///
/// where every `i j` is a 1-based inclusive range with `1 <= i <= j <= n`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    pub values: Vec<u32>,
    pub queries: Vec<Query>,
}

impl Problem {
    /// Parses and validates a problem against `limits`.
    ///
    /// Rejects the whole input on the first violation; nothing past it is read.
    pub fn parse(input: &[u8], limits: &Limits) -> Result<Self, ParseError> {
        let mut tokens = Tokens::new(input);

        let len = tokens.next_u64("array length")?;
        Limits::check("array length", len, limits.max_len)?;
        let len = len as usize;

        // Counts come from untrusted text: never reserve more than the input could hold.
        let mut values = Vec::with_capacity(len.min(input.len() / 2 + 1));
        for _ in 0..len {
            let value = tokens.next_u64("array value")?;
            Limits::check("array value", value, limits.max_value)?;
            values.push(value as u32);
        }

        let count = tokens.next_u64("query count")?;
        Limits::check("query count", count, limits.max_queries)?;
        let count = count as usize;

        let mut queries = Vec::with_capacity(count.min(input.len() / 4 + 1));
        for slot in 0..count {
            let start = tokens.next_u64("query start")?;
            let end = tokens.next_u64("query end")?;
            if start == 0 || start > end || end > len as u64 {
                io_warn!(query = slot + 1, start, end, len, "bad query range");
                return Err(ParseError::BadRange {
                    query: slot + 1,
                    start,
                    end,
                    len,
                });
            }
            queries.push(Query::new(start as usize - 1, end as usize - 1, slot));
        }

        tokens.finish()?;
        io_debug!(len, queries = count, "Problem::parse");
        Ok(Self { values, queries })
    }

    /// Reads everything from `reader`, then parses it.
    pub fn read_from(mut reader: impl Read, limits: &Limits) -> Result<Self, ParseError> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        Self::parse(&input, limits)
    }

    /// Answers with the offline engine, in submission order.
    pub fn solve(&self, solver: &Solver) -> Result<Vec<u32>, distinct_count::Error> {
        solver.solve(&self.values, &self.queries)
    }

    /// Answers with the brute-force reference, in submission order.
    pub fn solve_naive(&self) -> Result<Vec<u32>, distinct_count::Error> {
        naive::solve(&self.values, &self.queries)
    }
}
