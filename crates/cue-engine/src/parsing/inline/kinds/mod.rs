//! # Inline Kinds
//!
//! Inline-specific types that own their delimiter bytes. The tokenizer only
//! refers to these constants; it never hardcodes `*`, `[` or `//`.
//!
//! ## Types
//!
//! - **`Emphasis`**: `MARKER = b'*'`; a doubled marker is Strong
//! - **`Reference`**: `OPEN = b'['`, `CLOSE = b']'`
//! - **`Parenthetical`**: `OPEN = b'('`, `CLOSE = b')'`, cue directions only
//! - **`Comment`**: `MARKER = b"//"`, runs to the end of the text

pub mod comment;
pub mod emphasis;
pub mod parenthetical;
pub mod reference;

pub use comment::Comment;
pub use emphasis::Emphasis;
pub use parenthetical::Parenthetical;
pub use reference::Reference;
