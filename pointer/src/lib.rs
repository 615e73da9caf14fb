//! Point at an offset inside a text, compiler-diagnostic style.
//!
//! [`locator`] finds line boundaries around a byte position and steps
//! between neighbouring lines; [`renderer`] turns an offset into the target
//! line, a caret-style indicator line and optional context.

pub mod locator;
pub mod renderer;
pub mod utils;

pub use locator::core::LineRange;
pub use locator::error::LocateError;
pub use renderer::core::{OffsetUnit, RenderRequest, Rendered, point_at, render, render_located};
