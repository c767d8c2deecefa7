use core::fmt;

/// Specific kind of index error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorKind {
    /// Index is past the end of the string.
    OutOfBounds,
    /// Index falls inside a multi-byte UTF-8 sequence.
    NotCharBoundary,
}

/// Error returned when a caller passes an unusable position into a string.
///
/// This is a contract violation by the caller, never a property of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub kind: IndexErrorKind,
    /// The offending byte offset.
    pub index: usize,
    /// Byte length of the string that was indexed.
    pub len: usize,
}

impl IndexError {
    #[must_use]
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self {
            kind: IndexErrorKind::OutOfBounds,
            index,
            len,
        }
    }

    #[must_use]
    pub fn not_char_boundary(index: usize, len: usize) -> Self {
        Self {
            kind: IndexErrorKind::NotCharBoundary,
            index,
            len,
        }
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IndexErrorKind::OutOfBounds => write!(
                f,
                "index {} out of bounds for string of length {}",
                self.index, self.len
            ),
            IndexErrorKind::NotCharBoundary => write!(
                f,
                "index {} is not a char boundary (string length {})",
                self.index, self.len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IndexError {}
