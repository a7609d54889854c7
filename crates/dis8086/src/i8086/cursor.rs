use super::decode::DecodeError;

/// Read position over the program bytes.
///
/// Resolvers only peek; the driver moves the cursor forward once an
/// instruction has been fully resolved.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::at(data, 0)
    }

    /// Start at `offset`. An offset past the end is kept as given and
    /// has nothing remaining.
    pub fn at(data: &'a [u8], offset: usize) -> Self {
        ByteCursor { data, pos: offset }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    /// Byte `index` positions past the cursor, if present.
    pub fn peek(&self, index: usize) -> Option<u8> {
        self.data.get(self.pos + index).copied()
    }

    /// The next `len` bytes, or a truncation error if the buffer is short.
    pub fn peek_bytes(&self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.data
            .get(self.pos..self.pos + len)
            .ok_or(DecodeError::Truncated {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            })
    }

    pub fn advance(&mut self, len: usize) {
        debug_assert!(len <= self.remaining());
        self.pos += len.min(self.remaining());
    }
}
