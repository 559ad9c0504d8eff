//! Container assignment for freshly classified blocks.
//!
//! | Block | Container |
//! |---|---|
//! | Header, Description, End, ThematicBreak | the document |
//! | Cue | a new SimultaneousCues group under the document |
//! | dual Cue | the preceding SimultaneousCues group |
//! | Facsimile after a Facsimile | the earlier Facsimile, as a continuation Line |
//! | Facsimile | the document |
//! | Line | the LyricDirection of the last cue, when it has one |
//!
//! Anything else is rolled back to the line's arena mark and replaced with a
//! Description of the same line, so every line lands somewhere.

use crate::{
    ast::{ArenaMark, NodeArena, NodeId, NodeKind},
    error::ArenaError,
    parsing::scanner::Scanner,
};

use super::kinds::Description;

/// Where a block goes. `block` differs from the classified block when the
/// resolver had to fall back to a Description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub container: NodeId,
    pub block: NodeId,
}

pub struct ContainerResolver {
    root: NodeId,
}

impl ContainerResolver {
    pub fn new(root: NodeId) -> Self {
        Self { root }
    }

    /// Decides where `block` attaches. `mark` must have been taken just
    /// before `block` was classified.
    pub fn resolve(
        &self,
        arena: &mut NodeArena,
        s: &Scanner<'_>,
        block: NodeId,
        mark: ArenaMark,
    ) -> Result<Placement, ArenaError> {
        let kind = arena[block].kind;
        let container = match kind {
            NodeKind::Header(_)
            | NodeKind::Description
            | NodeKind::End
            | NodeKind::ThematicBreak => Some(self.root),
            NodeKind::Cue(cue) if !cue.is_dual => {
                let span = arena[block].span;
                let group = arena.alloc(NodeKind::SimultaneousCues, span)?;
                arena.append_child(self.root, group);
                Some(group)
            }
            NodeKind::Cue(_) => {
                self.last_root_child(arena, |k| matches!(k, NodeKind::SimultaneousCues))
            }
            NodeKind::Facsimile => self.place_facsimile(arena, s, block)?,
            NodeKind::Line => self.lyric_continuation(arena, block),
            _ => None,
        };

        match container {
            Some(container) => Ok(Placement { container, block }),
            None => {
                log::debug!(
                    "no container for {kind} at {}..{}, falling back to description",
                    s.bol(),
                    s.eol()
                );
                arena.discard_to(mark)?;
                let block = Description::build(s, arena)?;
                Ok(Placement {
                    container: self.root,
                    block,
                })
            }
        }
    }

    fn last_root_child(
        &self,
        arena: &NodeArena,
        pred: impl Fn(&NodeKind) -> bool,
    ) -> Option<NodeId> {
        arena[self.root]
            .last_child()
            .filter(|&last| pred(&arena[last].kind))
    }

    /// A facsimile following another becomes one more Line of it: the block
    /// is retyped to Line, its Line to Stream, and the inner Stream released.
    fn place_facsimile(
        &self,
        arena: &mut NodeArena,
        s: &Scanner<'_>,
        block: NodeId,
    ) -> Result<Option<NodeId>, ArenaError> {
        let Some(previous) = self.last_root_child(arena, |k| matches!(k, NodeKind::Facsimile))
        else {
            return Ok(Some(self.root));
        };
        let Some(line) = arena[block].first_child() else {
            return Ok(None);
        };
        let Some(stream) = arena[line].first_child() else {
            return Ok(None);
        };

        let span = arena[stream].span;
        arena[block].kind = NodeKind::Line;
        arena[line].kind = NodeKind::Stream;
        arena.set_span(block, span);
        arena.set_span(line, span);
        arena.unlink(stream);
        arena.release(stream)?;

        let merged = arena[previous].span.cover(s.line());
        arena.set_span(previous, merged);
        log::debug!(
            "facsimile continuation at {}..{} merged into {previous:?}",
            s.bol(),
            s.eol()
        );
        Ok(Some(previous))
    }

    /// Follows document → SimultaneousCues → last Cue → LyricDirection and
    /// grows all three to cover the new line.
    fn lyric_continuation(&self, arena: &mut NodeArena, block: NodeId) -> Option<NodeId> {
        let group = self.last_root_child(arena, |k| matches!(k, NodeKind::SimultaneousCues))?;
        let cue = arena[group].last_child()?;
        let NodeKind::Cue(data) = arena[cue].kind else {
            return None;
        };
        let direction = data.direction;
        if arena[direction].kind != NodeKind::LyricDirection {
            return None;
        }

        arena.extend_to_include(direction, block);
        arena.extend_to_include(cue, direction);
        arena.extend_to_include(group, cue);
        Some(direction)
    }
}
