use clap::ValueEnum;
use tracing::{debug, trace};

use crate::locator::core::{LineRange, line_after, line_before, line_range};
use crate::locator::error::LocateError;

/// The unit a caller-supplied offset is measured in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OffsetUnit {
    /// Unicode scalar values (`char`s).
    #[default]
    Chars,
    /// UTF-8 bytes. The offset must land on a character boundary.
    Bytes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub offset: usize,
    pub context: usize,
    pub pointer: char,
    pub unit: OffsetUnit,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            context: 0,
            pointer: '^',
            unit: OffsetUnit::Chars,
        }
    }
}

impl RenderRequest {
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    pub fn context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn pointer(mut self, pointer: char) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn unit(mut self, unit: OffsetUnit) -> Self {
        self.unit = unit;
        self
    }
}

/// Turn a caller offset into a byte position inside `text`.
///
/// The reported length on failure is measured in the same unit as the
/// offset.
pub fn resolve_offset(text: &str, offset: usize, unit: OffsetUnit) -> Result<usize, LocateError> {
    match unit {
        OffsetUnit::Bytes => {
            if offset > text.len() {
                Err(LocateError::OffsetOutOfBounds {
                    offset,
                    length: text.len(),
                })
            } else if !text.is_char_boundary(offset) {
                Err(LocateError::NotCharBoundary { offset })
            } else {
                Ok(offset)
            }
        }
        OffsetUnit::Chars => match text.char_indices().nth(offset) {
            Some((position, _)) => Ok(position),
            None => {
                let length = text.chars().count();
                if offset == length {
                    Ok(text.len())
                } else {
                    Err(LocateError::OffsetOutOfBounds { offset, length })
                }
            }
        },
    }
}

/// Walk up to `depth` lines away from `origin` with `step`, nearest first.
fn collect_context(
    text: &str,
    origin: LineRange,
    depth: usize,
    step: fn(&str, LineRange) -> Option<LineRange>,
) -> Vec<LineRange> {
    let mut lines = Vec::with_capacity(depth);
    let mut current = origin;
    while lines.len() < depth {
        let Some(next) = step(text, current) else {
            break;
        };
        lines.push(next);
        current = next;
    }
    lines
}

/// A rendered block together with the byte position the pointer landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub output: String,
    pub position: usize,
}

/// Render the line holding the requested offset with a pointer glyph under
/// the exact column, surrounded by up to `request.context` lines on each
/// side.
///
/// The output is the preceding lines in document order, the target line,
/// the indicator line (`indent` spaces, the glyph, `\n`) and then the
/// following lines. Context lines are copied verbatim with their own
/// terminators. A target line without a terminator gets a `\n` so the
/// indicator always starts a fresh line.
pub fn render(text: &str, request: &RenderRequest) -> Result<String, LocateError> {
    render_located(text, request).map(|rendered| rendered.output)
}

/// Like [`render`], also returning the resolved byte position so callers can
/// report where the pointer landed without resolving the offset again.
pub fn render_located(text: &str, request: &RenderRequest) -> Result<Rendered, LocateError> {
    let position = resolve_offset(text, request.offset, request.unit)?;
    let target = line_range(text, position)?;

    let indent = text[target.start..position].chars().count();
    debug!(
        offset = request.offset,
        unit = ?request.unit,
        position,
        line_start = target.start,
        indent,
        "resolved pointer position"
    );

    let preceding = collect_context(text, target, request.context, line_before);
    let following = collect_context(text, target, request.context, line_after);
    trace!(
        preceding = preceding.len(),
        following = following.len(),
        "collected context lines"
    );

    let mut out = String::with_capacity(
        preceding.iter().chain(&following).map(LineRange::len).sum::<usize>()
            + target.len()
            + indent
            + request.pointer.len_utf8()
            + 2,
    );
    for range in preceding.iter().rev() {
        out.push_str(range.slice(text));
    }
    out.push_str(target.slice(text));
    if !target.is_terminated(text) {
        out.push('\n');
    }
    out.extend(std::iter::repeat_n(' ', indent));
    out.push(request.pointer);
    out.push('\n');
    for range in &following {
        out.push_str(range.slice(text));
    }

    Ok(Rendered {
        output: out,
        position,
    })
}

/// Shorthand for [`render`] with a char offset.
pub fn point_at(
    text: &str,
    offset: usize,
    context: usize,
    pointer: char,
) -> Result<String, LocateError> {
    render(text, &RenderRequest::new(offset).context(context).pointer(pointer))
}
