use std::ops::Range;

use crate::locator::error::LocateError;

/// Half-open byte range `[start, end)` of one line, terminator included.
///
/// `end` either sits just past a line terminator or equals the text length
/// for the final line. Ranges never borrow the text they were computed
/// from, so they can be carried around and compared freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The literal line content, including its terminator if it has one.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }

    /// Whether the line ends with `\n`, `\r\n` or `\r`.
    pub fn is_terminated(&self, text: &str) -> bool {
        matches!(self.slice(text).as_bytes().last(), Some(b'\n' | b'\r'))
    }
}

impl From<LineRange> for Range<usize> {
    fn from(range: LineRange) -> Self {
        range.start..range.end
    }
}

fn is_terminator(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Returns the range of the line containing byte `position`.
///
/// `position == text.len()` yields the final line, which is empty when the
/// text ends with a terminator. A position on the `\n` of a `\r\n` pair
/// belongs to the line that pair terminates.
pub fn line_range(text: &str, position: usize) -> Result<LineRange, LocateError> {
    let bytes = text.as_bytes();
    if position > bytes.len() {
        return Err(LocateError::OffsetOutOfBounds {
            offset: position,
            length: bytes.len(),
        });
    }

    let mut start = position;
    if start > 0 && start < bytes.len() && bytes[start] == b'\n' && bytes[start - 1] == b'\r' {
        start -= 1;
    }
    while start > 0 && !is_terminator(bytes[start - 1]) {
        start -= 1;
    }

    // `\r` and `\n` never occur inside a multi-byte UTF-8 sequence, so a
    // byte scan is safe and every boundary found lands on a char boundary.
    let end = match bytes[position..].iter().position(|&b| is_terminator(b)) {
        Some(i) => {
            let at = position + i;
            if bytes[at] == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                at + 2
            } else {
                at + 1
            }
        }
        None => bytes.len(),
    };

    Ok(LineRange { start, end })
}

/// Returns the line immediately preceding `range`, or `None` at the start
/// of the text.
///
/// `range` should come from [`line_range`] or one of the stepping functions.
pub fn line_before(text: &str, range: LineRange) -> Option<LineRange> {
    if range.start == 0 {
        return None;
    }
    line_range(text, range.start - 1).ok()
}

/// Returns the line immediately following `range`, or `None` at the end of
/// the text.
pub fn line_after(text: &str, range: LineRange) -> Option<LineRange> {
    if range.end >= text.len() {
        return None;
    }
    line_range(text, range.end).ok()
}

/// Iterator over every line of a text, first to last.
pub struct Lines<'a> {
    text: &'a str,
    next: Option<LineRange>,
}

impl Iterator for Lines<'_> {
    type Item = LineRange;

    fn next(&mut self) -> Option<LineRange> {
        let current = self.next?;
        self.next = line_after(self.text, current);
        Some(current)
    }
}

pub fn lines(text: &str) -> Lines<'_> {
    Lines {
        text,
        next: line_range(text, 0).ok(),
    }
}
