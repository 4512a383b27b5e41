use thiserror::Error;

/// Contract and capacity violations reported by [`crate::Solver`] and [`crate::naive`].
///
/// Every check runs before the sweep starts, so an error means no query was answered.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("array length {len} exceeds the configured maximum of {max_len}")]
    CapacityExceeded { len: usize, max_len: usize },

    #[error("value {value} at position {position} is outside the value domain 0..{limit}")]
    ValueOutOfDomain {
        position: usize,
        value: u32,
        limit: u32,
    },

    #[error("query in slot {slot} has start {start} after end {end}")]
    InvalidRange {
        slot: usize,
        start: usize,
        end: usize,
    },

    #[error("query in slot {slot} ends at {end}, past the array length {len}")]
    RangeOutOfBounds { slot: usize, end: usize, len: usize },

    #[error("query slot {slot} is outside a batch of {count} queries")]
    SlotOutOfBounds { slot: usize, count: usize },

    #[error("query slot {slot} is used more than once")]
    DuplicateSlot { slot: usize },

    #[error("query in slot {slot} uses index 0 in a 1-based range")]
    ZeroOneBasedIndex { slot: usize },

    #[error("a dense last-occurrence table needs a value limit")]
    DenseTableWithoutLimit,
}
