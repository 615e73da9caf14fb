use std::fmt;

/// A 1-based `path:line:col` location, used when reporting where a pointer
/// landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Loc<'a> {
    pub input_path: &'a str,
    pub line_number: usize,
    pub column: usize,
}

impl<'a> Loc<'a> {
    pub fn at(input_path: &'a str, text: &str, position: usize) -> Self {
        let (line_number, column) = line_col(text, position);
        Self {
            input_path,
            line_number,
            column,
        }
    }
}

impl fmt::Display for Loc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.input_path, self.line_number, self.column)
    }
}

/// Convert a byte position into a 1-based (line, column) pair.
///
/// Lines follow the same terminators as the locator (`\n`, `\r\n`, `\r`).
/// Columns count chars, not bytes.
pub fn line_col(src: &str, position: usize) -> (usize, usize) {
    let clamped = position.min(src.len());
    let head = &src.as_bytes()[..clamped];

    let mut line = 1;
    let mut line_start = 0;
    let mut i = 0;
    while i < head.len() {
        match head[i] {
            b'\r' if head.get(i + 1) == Some(&b'\n') => {
                line += 1;
                i += 2;
                line_start = i;
                continue;
            }
            b'\r' if i + 1 == head.len() && src.as_bytes().get(i + 1) == Some(&b'\n') => {
                // position sits on the `\n` of a `\r\n` pair
                break;
            }
            b'\n' | b'\r' => {
                line += 1;
                line_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    let column = src[line_start..]
        .char_indices()
        .take_while(|(i, _)| line_start + i < clamped)
        .count()
        + 1;

    (line, column)
}
