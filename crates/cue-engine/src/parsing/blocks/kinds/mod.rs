//! # Block Kinds
//!
//! One type per block construct, each owning its delimiter constants and the
//! scan that recognizes it at the start of a trimmed line.
//!
//! ## Types
//!
//! - **`ThematicBreak`**: `MARKER = b'-'`, at least `MIN_RUN` of them
//! - **`Header`**: forced (`.`) and structural (`Act`, `Scene`, `Page`, `Frame`)
//! - **`EndMarker`**: `TEXT = b"The End"`
//! - **`Facsimile`**: `PREFIX = b'>'`
//! - **`Lyric`**: `PREFIX = b'~'`
//! - **`Cue`**: `DUAL_PREFIX = b'^'`, `SEPARATOR = b':'`
//! - **`Description`**: fallback for anything else
//!
//! A scan either builds the block's subtree and returns its root, or returns
//! `None` with the scanner cursor where it found it.

pub mod cue;
pub mod description;
pub mod end_marker;
pub mod facsimile;
pub mod header;
pub mod lyric;
pub mod thematic_break;

pub use cue::Cue;
pub use description::Description;
pub use end_marker::EndMarker;
pub use facsimile::Facsimile;
pub use header::Header;
pub use lyric::Lyric;
pub use thematic_break::ThematicBreak;

use crate::{
    ast::{NodeArena, NodeId, NodeKind, Span},
    error::ArenaError,
};

/// Allocates a text-bearing node of `kind` with a Stream child over the same
/// span. Inline parsing later fills the Stream.
pub(crate) fn with_stream(
    arena: &mut NodeArena,
    kind: NodeKind,
    span: Span,
) -> Result<NodeId, ArenaError> {
    let node = arena.alloc(kind, span)?;
    let stream = arena.alloc(NodeKind::Stream, span)?;
    arena.append_child(node, stream);
    Ok(node)
}
