use miette::Diagnostic;
use thiserror::Error;

/// What can go wrong while resolving an offset to a line.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum LocateError {
    #[error("Offset {offset} is beyond input length {length}")]
    #[diagnostic(
        code(pointer::locator::out_of_bounds),
        help("Offsets range from 0 up to and including the input length")
    )]
    OffsetOutOfBounds { offset: usize, length: usize },

    #[error("Byte offset {offset} falls inside a multi-byte character")]
    #[diagnostic(
        code(pointer::locator::not_char_boundary),
        help("Use `--unit chars` or pick an offset on a character boundary")
    )]
    NotCharBoundary { offset: usize },
}
