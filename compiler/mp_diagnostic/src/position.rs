//! Line to offset resolution against the live document.

/// A line that cannot be placed in the active document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The document has fewer lines than the diagnostic refers to.
    #[error("line {line} is out of range (document has {line_count} lines)")]
    LineOutOfRange { line: u32, line_count: usize },
    /// The host could not resolve the line.
    #[error("line {line} cannot be resolved in the active document")]
    Unresolved { line: u32 },
}

/// Resolves 1-based line numbers to the character offset of their start.
///
/// Implemented by [`LineOffsetTable`] and by any
/// `Fn(u32) -> Option<usize>`, which lets a host wrap its own buffer.
pub trait PositionResolver {
    fn line_start(&self, line: u32) -> Result<usize, PositionError>;
}

impl<F> PositionResolver for F
where
    F: Fn(u32) -> Option<usize>,
{
    fn line_start(&self, line: u32) -> Result<usize, PositionError> {
        self(line).ok_or(PositionError::Unresolved { line })
    }
}

/// Pre-computed line start table for a document text.
///
/// Offsets count characters, not bytes; lines are separated by `\n`.
///
/// # Example
///
/// ```
/// use mp_diagnostic::{LineOffsetTable, PositionResolver};
///
/// let table = LineOffsetTable::build("a = 2\nb = a * 3\n");
///
/// assert_eq!(table.line_start(1), Ok(0));
/// assert_eq!(table.line_start(2), Ok(6));
/// assert_eq!(table.line_count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineOffsetTable {
    /// offsets[0] = 0 (line 1 starts at character 0)
    /// offsets[1] = character after the first `\n`, and so on
    offsets: Vec<usize>,
}

impl LineOffsetTable {
    pub fn build(text: &str) -> Self {
        let mut offsets = vec![0];
        for (i, c) in text.chars().enumerate() {
            if c == '\n' {
                offsets.push(i + 1);
            }
        }
        LineOffsetTable { offsets }
    }

    /// Offset of the start of a 1-based line, `None` if out of range.
    pub fn line_start_offset(&self, line: u32) -> Option<usize> {
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        self.offsets.get(index).copied()
    }

    /// 1-based line containing `offset`.
    pub fn line_from_offset(&self, offset: usize) -> u32 {
        let index = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(index + 1).unwrap_or(u32::MAX)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

impl PositionResolver for LineOffsetTable {
    fn line_start(&self, line: u32) -> Result<usize, PositionError> {
        self.line_start_offset(line)
            .ok_or(PositionError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            })
    }
}
