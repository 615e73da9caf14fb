pub mod glyph;
pub mod input;
pub mod loc;
