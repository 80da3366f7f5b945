//! Context types for rule execution.

use proc_macro2::LineColumn;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Carries the file content alongside the parsed AST so rules can turn
/// `proc_macro2` span positions into byte offsets for text edits.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Converts a span position to a byte offset from the start of the file.
    ///
    /// `proc_macro2` reports 1-indexed lines and 0-indexed columns counted
    /// in characters; text edits splice byte ranges, so the column is
    /// re-measured against the actual line content.
    #[must_use]
    pub fn offset_of(&self, pos: LineColumn) -> usize {
        if pos.line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line) in self.content.split('\n').enumerate() {
            if i + 1 == pos.line {
                let in_line = line
                    .char_indices()
                    .nth(pos.column)
                    .map_or(line.len(), |(byte_idx, _)| byte_idx);
                return offset + in_line;
            }
            offset += line.len() + 1;
        }

        self.content.len()
    }

    /// Converts a span into a `(start, end)` byte range.
    #[must_use]
    pub fn span_range(&self, span: proc_macro2::Span) -> (usize, usize) {
        (self.offset_of(span.start()), self.offset_of(span.end()))
    }
}
