use thiserror::Error;

/// Why a problem text was rejected.
///
/// Offsets are byte offsets into the input; query numbers and ranges are reported 1-based, the
/// way they appear in the text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("input ended while reading {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected byte {byte:#04x} at offset {offset}")]
    InvalidByte { offset: usize, byte: u8 },

    #[error("number at offset {offset} does not fit in 64 bits")]
    Overflow { offset: usize },

    #[error("{what} is {value}, above the limit of {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },

    #[error("query {query} has range {start}..={end}, not inside 1..={len}")]
    BadRange {
        query: usize,
        start: u64,
        end: u64,
        len: usize,
    },

    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
