use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
#[error("Pointer must be exactly one character, got {input:?}")]
#[diagnostic(
    code(pointer::cli::invalid_pointer_glyph),
    help("Pass a single character such as `^` or `|`")
)]
pub struct InvalidPointerGlyph {
    pub input: String,
}

/// Parse the `--pointer` option. Exactly one `char` is accepted.
pub fn parse_pointer_glyph(input: &str) -> Result<char, InvalidPointerGlyph> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(InvalidPointerGlyph {
            input: input.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_is_accepted() {
        assert_eq!(parse_pointer_glyph("^"), Ok('^'));
        assert_eq!(parse_pointer_glyph("↑"), Ok('↑'));
    }

    #[test]
    fn test_empty_and_multi_char_are_rejected() {
        assert!(parse_pointer_glyph("").is_err());
        let err = parse_pointer_glyph("^^").unwrap_err();
        assert_eq!(err.input, "^^");
        assert_eq!(
            err.to_string(),
            "Pointer must be exactly one character, got \"^^\""
        );
    }
}
