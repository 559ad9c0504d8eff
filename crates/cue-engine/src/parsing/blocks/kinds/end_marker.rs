use crate::{
    ast::{NodeArena, NodeId, NodeKind},
    error::ArenaError,
    parsing::scanner::Scanner,
};

/// The closing `The End` line. Must be the whole trimmed line.
pub struct EndMarker;

impl EndMarker {
    pub const TEXT: &'static [u8; 7] = b"The End";

    pub fn scan(s: &mut Scanner<'_>, arena: &mut NodeArena) -> Result<Option<NodeId>, ArenaError> {
        if s.ewc() - s.loc() != Self::TEXT.len() || !s.eat(Self::TEXT) {
            return Ok(None);
        }
        arena.alloc(NodeKind::End, s.line()).map(Some)
    }
}
