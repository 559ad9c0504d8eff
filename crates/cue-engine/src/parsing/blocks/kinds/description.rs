use crate::{
    ast::{NodeArena, NodeId, NodeKind},
    error::ArenaError,
    parsing::scanner::Scanner,
};

/// Fallback for any line no other block recognizes. Always succeeds.
pub struct Description;

impl Description {
    /// Builds `Description { Stream }`; the block spans the raw line and the
    /// stream the trimmed text.
    pub fn build(s: &Scanner<'_>, arena: &mut NodeArena) -> Result<NodeId, ArenaError> {
        let block = arena.alloc(NodeKind::Description, s.line())?;
        let stream = arena.alloc(NodeKind::Stream, s.trimmed())?;
        arena.append_child(block, stream);
        Ok(block)
    }
}
