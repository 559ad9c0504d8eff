use crate::{
    ast::{NodeArena, NodeId, NodeKind},
    error::ArenaError,
    parsing::scanner::Scanner,
};

/// A line made only of unescaped hyphens, at least [`Self::MIN_RUN`] long.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: u8 = b'-';
    pub const MIN_RUN: usize = 3;

    pub fn scan(s: &mut Scanner<'_>, arena: &mut NodeArena) -> Result<Option<NodeId>, ArenaError> {
        let start = s.loc();
        let mut end = start;
        while end < s.ewc() && s.is_unescaped(end, Self::MARKER) {
            end += 1;
        }

        // The line is trimmed, so anything after the run is non-whitespace.
        if end - start < Self::MIN_RUN || end != s.ewc() {
            return Ok(None);
        }

        s.set_loc(end);
        arena.alloc(NodeKind::ThematicBreak, s.line()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Span, parsing::blocks::kinds::test_support::scan_first_line};
    use rstest::rstest;

    #[rstest]
    #[case("---")]
    #[case("  -----  ")]
    #[case("---\nnext")]
    fn recognizes_hyphen_runs(#[case] src: &str) {
        let (arena, found, _) = scan_first_line(src, ThematicBreak::scan);
        let id = found.expect("thematic break");
        assert_eq!(arena[id].kind, NodeKind::ThematicBreak);
        assert_eq!(arena[id].span.start, 0);
    }

    #[rstest]
    #[case("--")]
    #[case("--- x")]
    #[case("--- ---")]
    #[case(r"-\--")]
    #[case("- - -")]
    fn rejects_everything_else(#[case] src: &str) {
        let (arena, found, loc) = scan_first_line(src, ThematicBreak::scan);
        assert_eq!(found, None);
        assert!(arena.is_empty());
        assert_eq!(loc, src.len() - src.trim_start().len());
    }

    #[test]
    fn spans_the_raw_line() {
        let (arena, found, _) = scan_first_line(" ---  \n", ThematicBreak::scan);
        assert_eq!(arena[found.unwrap()].span, Span::new(0, 6));
    }
}
