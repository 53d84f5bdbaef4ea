/// A span referencing a contiguous range of the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset into the input
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl Span {
    #[inline]
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Span covering `start..end`
    #[inline]
    pub(crate) const fn range(start: usize, end: usize) -> Self {
        Self {
            offset: start,
            len: end - start,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// End offset (exclusive)
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.len)
    }

    /// Extract the bytes from `input`, or an empty slice if out of range
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        input.get(self.offset..self.end()).unwrap_or_default()
    }
}
