use crate::{
    ast::{NodeArena, NodeId, NodeKind, Span},
    error::ArenaError,
    parsing::scanner::Scanner,
};

use super::with_stream;

/// Verbatim text quoted with a leading `>`. Consecutive facsimile lines are
/// merged into one block by the container resolver.
pub struct Facsimile;

impl Facsimile {
    pub const PREFIX: u8 = b'>';

    /// Builds `Facsimile { Line { Stream } }`, the line holding the trimmed
    /// text after the prefix.
    pub fn scan(s: &mut Scanner<'_>, arena: &mut NodeArena) -> Result<Option<NodeId>, ArenaError> {
        if !s.eat_unescaped(Self::PREFIX) {
            return Ok(None);
        }
        let bstart = s.advance_to_first_nonspace();

        let block = arena.alloc(NodeKind::Facsimile, s.line())?;
        let line = with_stream(arena, NodeKind::Line, Span::new(bstart, s.ewc()))?;
        arena.append_child(block, line);

        s.set_loc(s.ewc());
        Ok(Some(block))
    }
}
