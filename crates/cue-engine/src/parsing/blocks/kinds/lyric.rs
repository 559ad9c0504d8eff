use crate::{
    ast::{NodeArena, NodeId, NodeKind, Span},
    error::ArenaError,
    parsing::scanner::Scanner,
};

use super::with_stream;

/// A sung line introduced by `~`. A trailing `~` is ordinary text.
pub struct Lyric;

impl Lyric {
    pub const PREFIX: u8 = b'~';

    /// Consumes the prefix and following whitespace, returning where the
    /// lyric text starts.
    pub fn content_start(s: &mut Scanner<'_>) -> Option<usize> {
        if !s.eat_unescaped(Self::PREFIX) {
            return None;
        }
        Some(s.advance_to_first_nonspace())
    }

    /// Builds `Line { Stream }` over the lyric text.
    pub fn scan(s: &mut Scanner<'_>, arena: &mut NodeArena) -> Result<Option<NodeId>, ArenaError> {
        let Some(bstart) = Self::content_start(s) else {
            return Ok(None);
        };
        let line = with_stream(arena, NodeKind::Line, Span::new(bstart, s.ewc()))?;
        s.set_loc(s.ewc());
        Ok(Some(line))
    }
}
