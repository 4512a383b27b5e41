use alloc::vec::Vec;

use crate::Error;

/// A range distinct-count query: the inclusive 0-based range `[start, end]` and the output
/// slot its answer is written to.
///
/// Slots decouple answer order from processing order: the engine sorts queries by `end`, but
/// `results[slot]` always holds this query's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    pub start: usize,
    pub end: usize, // inclusive
    pub slot: usize,
}

impl Query {
    pub fn new(start: usize, end: usize, slot: usize) -> Self {
        Self { start, end, slot }
    }

    /// Converts a 1-based inclusive range (the usual external format) to a 0-based query.
    pub fn from_one_based(start: usize, end: usize, slot: usize) -> Result<Self, Error> {
        if start == 0 || end == 0 {
            return Err(Error::ZeroOneBasedIndex { slot });
        }
        Ok(Self::new(start - 1, end - 1, slot))
    }

    /// Converts 1-based ranges in submission order; the `i`-th pair gets slot `i`.
    pub fn batch_from_one_based(
        pairs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Vec<Self>, Error> {
        pairs
            .into_iter()
            .enumerate()
            .map(|(slot, (start, end))| Self::from_one_based(start, end, slot))
            .collect()
    }

    /// Number of positions covered by the range.
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start).saturating_add(1)
    }
}

/// How the sweep remembers the last occurrence of each value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableKind {
    /// Dense when the value limit is small relative to the array, sparse otherwise.
    #[default]
    Auto,
    /// A vector indexed by value, sized to the value limit.
    Dense,
    /// A map keyed by value, sized to the distinct values actually seen.
    Sparse,
}

/// What a finished sweep did.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSummary {
    /// Positions visited before every query was answered.
    pub positions_swept: usize,
    pub queries_answered: usize,
    /// Table actually used (never `Auto`).
    pub table: TableKind,
}

impl SweepSummary {
    /// Whether the sweep stopped before the last position.
    pub fn stopped_early(&self, len: usize) -> bool {
        self.positions_swept < len
    }
}
