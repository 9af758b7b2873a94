/// A position in an immutable `&str` input
///
/// Cursors are `Copy`: parsers never mutate the input, they hand back a new
/// cursor describing the unconsumed remainder. Alternation keeps the cursor it
/// started from and simply retries with it, which is what makes backtracking
/// free.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cursor<'code> {
    /// `position` is a byte offset on a char boundary, strictly before the end
    Valid { source: &'code str, position: usize },
    EndOfFile { source: &'code str },
}

impl<'code> Cursor<'code> {
    pub fn new(source: &'code str) -> Self {
        if source.is_empty() {
            return Cursor::EndOfFile { source };
        }
        Cursor::Valid {
            source,
            position: 0,
        }
    }

    /// The character under the cursor, `None` at end of input
    pub fn value(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advance past the current character
    ///
    /// At end of input the cursor stays where it is.
    pub fn next(self) -> Self {
        match self {
            Cursor::Valid { source, position } => {
                let width = source[position..].chars().next().map_or(0, char::len_utf8);
                let position = position + width;
                if position >= source.len() {
                    Cursor::EndOfFile { source }
                } else {
                    Cursor::Valid { source, position }
                }
            }
            Cursor::EndOfFile { source } => Cursor::EndOfFile { source },
        }
    }

    /// Byte offset into the source; the source length at end of input
    pub fn position(&self) -> usize {
        match self {
            Cursor::Valid { position, .. } => *position,
            Cursor::EndOfFile { source } => source.len(),
        }
    }

    pub fn eos(&self) -> bool {
        matches!(self, Cursor::EndOfFile { .. })
    }

    /// The whole input this cursor walks over
    pub fn source(&self) -> &'code str {
        match self {
            Cursor::Valid { source, .. } => source,
            Cursor::EndOfFile { source } => source,
        }
    }

    /// The unconsumed remainder, always a suffix of [`Cursor::source`]
    pub fn rest(&self) -> &'code str {
        match self {
            Cursor::Valid { source, position } => &source[*position..],
            Cursor::EndOfFile { .. } => "",
        }
    }
}
