use crate::ParseError;

/// A tokenizer over whitespace-separated unsigned decimal integers.
///
/// Only ASCII digits and ASCII whitespace are accepted; anything else (including a minus sign)
/// is an [`ParseError::InvalidByte`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn skip_whitespace(&mut self) {
        while self
            .input
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    /// Reads the next number; `expected` names it in the error if the input ends first.
    pub fn next_u64(&mut self, expected: &'static str) -> Result<u64, ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        let mut value = 0u64;
        while let Some(&byte) = self.input.get(self.pos) {
            if byte.is_ascii_whitespace() {
                break;
            }
            if !byte.is_ascii_digit() {
                return Err(ParseError::InvalidByte {
                    offset: self.pos,
                    byte,
                });
            }
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or(ParseError::Overflow { offset: start })?;
            self.pos += 1;
        }
        if self.pos == start {
            return Err(ParseError::UnexpectedEnd { expected });
        }
        Ok(value)
    }

    /// Succeeds if only whitespace is left.
    pub fn finish(mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(ParseError::TrailingInput { offset: self.pos });
        }
        Ok(())
    }
}
