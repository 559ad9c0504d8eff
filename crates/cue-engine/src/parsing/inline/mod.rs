//! # Inline Parsing
//!
//! Delimiter-stack resolution of inline spans inside a block's text.
//!
//! ## Architecture
//!
//! Inline parsing runs once per text-bearing node, after its block has been
//! placed. It has two passes over the node's range:
//!
//! 1. **Tokenize and match**: delimiters are scanned left to right and
//!    matched against the [`DelimiterStack`] as they arrive
//! 2. **Construct**: resolved tokens are replayed in order to build span
//!    nodes, with Literal nodes filling the gaps
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter bytes per inline construct
//! - **`delimiter`**: `DelimiterToken`, `DelimiterKind` precedence, `DelimiterStack`
//! - **`tokenizer`**: `next_token` over a `Scanner`
//! - **`parser`**: `InlineParser` driving both passes
//!
//! ## Escapes
//!
//! A delimiter byte directly after a backslash is never a token; it stays
//! in the surrounding Literal together with the backslash.

pub mod delimiter;
pub mod kinds;
pub mod parser;
pub mod tokenizer;

pub use delimiter::{DelimiterKind, DelimiterStack, DelimiterToken, Resolution};
pub use parser::InlineParser;
