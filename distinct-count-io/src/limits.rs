use distinct_count::SolverOptions;

use crate::ParseError;

/// Input limits enforced while parsing, before any solving happens.
///
/// The defaults are the classic problem bounds: up to 30 000 values in `0..=1_000_000` and up
/// to 200 000 queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub max_len: usize,
    /// Inclusive.
    pub max_value: u32,
    pub max_queries: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_len: 30_000,
            max_value: 1_000_000,
            max_queries: 200_000,
        }
    }
}

impl Limits {
    /// Accepts anything representable.
    pub fn unlimited() -> Self {
        Self {
            max_len: usize::MAX,
            max_value: u32::MAX,
            max_queries: usize::MAX,
        }
    }

    /// Solver options matching these limits: the value domain is `0..=max_value`.
    pub fn solver_options(&self) -> SolverOptions {
        let value_limit = self.max_value.checked_add(1);
        let max_len = (self.max_len != usize::MAX).then_some(self.max_len);
        SolverOptions::new()
            .with_value_limit(value_limit)
            .with_max_len(max_len)
    }

    pub(crate) fn check(
        what: &'static str,
        value: u64,
        limit: impl TryInto<u64>,
    ) -> Result<(), ParseError> {
        let limit = limit.try_into().unwrap_or(u64::MAX);
        if value > limit {
            io_warn!(what, value, limit, "input limit exceeded");
            return Err(ParseError::LimitExceeded { what, value, limit });
        }
        Ok(())
    }
}
