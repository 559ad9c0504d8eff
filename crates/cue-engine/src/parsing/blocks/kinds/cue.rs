use crate::{
    ast::{CueData, NodeArena, NodeId, NodeKind, Span},
    error::ArenaError,
    parsing::scanner::Scanner,
};

/// A speaker cue: `NAME: direction`, or `^NAME: direction` for a cue spoken
/// together with the preceding group.
pub struct Cue;

impl Cue {
    pub const DUAL_PREFIX: u8 = b'^';
    pub const SEPARATOR: u8 = b':';
    /// How far past the name start the separator may appear.
    pub const DEFAULT_NAME_BOUND: usize = 24;

    /// Builds `Cue { Name, PlainDirection }`. Fails when no separator occurs
    /// within `name_bound` bytes of the name start.
    pub fn scan(
        s: &mut Scanner<'_>,
        arena: &mut NodeArena,
        name_bound: usize,
    ) -> Result<Option<NodeId>, ArenaError> {
        let restore = s.loc();
        let is_dual = s.eat_unescaped(Self::DUAL_PREFIX);

        let nstart = s.advance_to_first_nonspace();
        s.advance_to_colon(name_bound);
        if s.is_at_eol() {
            s.set_loc(restore);
            return Ok(None);
        }
        let colon = s.loc();
        let nend = s.backtrack_to_first_nonspace().max(nstart);

        s.set_loc(colon + 1);
        let dstart = s.advance_to_first_nonspace();

        let name = arena.alloc(NodeKind::Name, Span::new(nstart, nend))?;
        let direction = arena.alloc(NodeKind::PlainDirection, Span::new(dstart, s.ewc()))?;
        let data = CueData {
            is_dual,
            name,
            direction,
        };
        let cue = arena.alloc(NodeKind::Cue(data), s.line())?;
        arena.append_child(cue, name);
        arena.append_child(cue, direction);

        s.set_loc(s.ewc());
        Ok(Some(cue))
    }
}
