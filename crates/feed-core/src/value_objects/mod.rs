//! Value objects - immutable types that represent domain concepts

mod cursor;

pub use cursor::{CursorParseError, PostCursor};
