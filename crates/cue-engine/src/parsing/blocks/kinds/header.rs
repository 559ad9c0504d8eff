use crate::{
    ast::{HeaderData, HeaderKind, NodeArena, NodeId, NodeKind, Span},
    error::ArenaError,
    parsing::scanner::Scanner,
};

use super::with_stream;

/// Header lines: `.Keyword - Title` (forced) and `Act 1 - Title` style
/// structural headers.
pub struct Header;

impl Header {
    pub const FORCED_PREFIX: u8 = b'.';
    pub const TITLE_SEPARATOR: u8 = b'-';
    pub const KEYWORDS: [(&'static [u8], HeaderKind); 4] = [
        (b"Act", HeaderKind::Act),
        (b"Scene", HeaderKind::Scene),
        (b"Page", HeaderKind::Page),
        (b"Frame", HeaderKind::Frame),
    ];

    /// `.` followed by a keyword, then an optional `- Title`.
    pub fn scan_forced(
        s: &mut Scanner<'_>,
        arena: &mut NodeArena,
    ) -> Result<Option<NodeId>, ArenaError> {
        if !s.eat(&[Self::FORCED_PREFIX]) {
            return Ok(None);
        }

        let kstart = s.advance_to_first_nonspace();
        let hyphen = s.advance_to_hyphen();
        let kend = s.backtrack_to_first_nonspace().max(kstart);
        s.set_loc(hyphen);

        let keyword = Span::new(kstart, kend);
        Self::build(s, arena, HeaderKind::Forced, keyword, None).map(Some)
    }

    /// One of [`Self::KEYWORDS`], a non-empty remainder holding the
    /// identifier, then an optional `- Title`. Without a hyphen the whole
    /// remainder is the identifier.
    pub fn scan_structural(
        s: &mut Scanner<'_>,
        arena: &mut NodeArena,
    ) -> Result<Option<NodeId>, ArenaError> {
        let restore = s.loc();
        let Some(kind) = Self::KEYWORDS
            .iter()
            .find_map(|(word, kind)| s.eat(word).then_some(*kind))
        else {
            return Ok(None);
        };
        let keyword = Span::new(restore, s.loc());

        let istart = s.advance_to_first_nonspace();
        if s.is_at_eol() {
            s.set_loc(restore);
            return Ok(None);
        }

        let hyphen = s.advance_to_hyphen();
        let iend = s.backtrack_to_first_nonspace();
        s.set_loc(hyphen);

        let identifier = (iend > istart).then(|| Span::new(istart, iend));
        Self::build(s, arena, kind, keyword, identifier).map(Some)
    }

    /// Builds the header subtree with the cursor on the title separator (or
    /// at the end of the line when there is none).
    fn build(
        s: &mut Scanner<'_>,
        arena: &mut NodeArena,
        kind: HeaderKind,
        keyword: Span,
        identifier: Option<Span>,
    ) -> Result<NodeId, ArenaError> {
        let title = if s.eat(&[Self::TITLE_SEPARATOR]) {
            let tstart = s.advance_to_first_nonspace();
            (!s.is_at_eol()).then(|| Span::new(tstart, s.ewc()))
        } else {
            None
        };

        let keyword = arena.alloc(NodeKind::Keyword, keyword)?;
        let identifier = identifier
            .map(|span| arena.alloc(NodeKind::Identifier, span))
            .transpose()?;
        let title = title
            .map(|span| with_stream(arena, NodeKind::Title, span))
            .transpose()?;

        let data = HeaderData {
            kind,
            keyword,
            identifier,
            title,
        };
        let head = arena.alloc(NodeKind::Header(data), s.line())?;
        for child in [Some(keyword), identifier, title].into_iter().flatten() {
            arena.append_child(head, child);
        }
        s.set_loc(s.ewc());
        Ok(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::test_support::{child_summary, scan_first_line};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn header_data(arena: &NodeArena, id: NodeId) -> HeaderData {
        match arena[id].kind {
            NodeKind::Header(data) => data,
            other => panic!("expected header, got {other}"),
        }
    }

    fn text<'a>(src: &'a str, arena: &NodeArena, id: Option<NodeId>) -> Option<&'a str> {
        id.map(|id| {
            let span = arena[id].span;
            &src[span.start..span.end]
        })
    }

    #[rstest]
    #[case("Act 1 - The Beginning", HeaderKind::Act, Some("1"), Some("The Beginning"))]
    #[case("Scene 4", HeaderKind::Scene, Some("4"), None)]
    #[case("Scene 4 Part 2", HeaderKind::Scene, Some("4 Part 2"), None)]
    #[case("Page - Cover", HeaderKind::Page, None, Some("Cover"))]
    #[case("Frame 12 -", HeaderKind::Frame, Some("12"), None)]
    #[case(r"Act 1\-2 - Both", HeaderKind::Act, Some(r"1\-2"), Some("Both"))]
    fn structural_headers(
        #[case] src: &str,
        #[case] kind: HeaderKind,
        #[case] identifier: Option<&str>,
        #[case] title: Option<&str>,
    ) {
        let (arena, found, _) = scan_first_line(src, Header::scan_structural);
        let head = found.expect("header");
        let data = header_data(&arena, head);

        assert_eq!(data.kind, kind);
        assert_eq!(text(src, &arena, Some(data.keyword)), Some(&src[..kind.name().len()]));
        assert_eq!(text(src, &arena, data.identifier), identifier);
        assert_eq!(text(src, &arena, data.title), title);
        assert_eq!(arena[head].span, Span::new(0, src.len()));
    }

    #[rstest]
    #[case("Act")]
    #[case("Scene   ")]
    #[case("act 1")]
    #[case("Chapter 1")]
    fn non_headers_restore_cursor(#[case] src: &str) {
        let (arena, found, loc) = scan_first_line(src, Header::scan_structural);
        assert_eq!(found, None);
        assert!(arena.is_empty());
        assert_eq!(loc, 0);
    }

    #[test]
    fn keyword_match_has_no_word_boundary() {
        let src = "Actually, no";
        let (arena, found, _) = scan_first_line(src, Header::scan_structural);
        let data = header_data(&arena, found.unwrap());
        assert_eq!(text(src, &arena, data.identifier), Some("ually, no"));
    }

    #[test]
    fn title_has_a_stream() {
        let (arena, found, _) = scan_first_line("Act 1 - Go", Header::scan_structural);
        let data = header_data(&arena, found.unwrap());
        let title = data.title.unwrap();
        assert_eq!(child_summary(&arena, title), vec!["Stream@8..10"]);
    }

    #[rstest]
    #[case(".Prologue - Before", "Prologue", Some("Before"))]
    #[case(". Intermission ", "Intermission", None)]
    #[case(".Coda -  ", "Coda", None)]
    #[case(".", "", None)]
    fn forced_headers(#[case] src: &str, #[case] keyword: &str, #[case] title: Option<&str>) {
        let (arena, found, _) = scan_first_line(src, Header::scan_forced);
        let data = header_data(&arena, found.expect("forced header"));
        assert_eq!(data.kind, HeaderKind::Forced);
        assert_eq!(text(src, &arena, Some(data.keyword)), Some(keyword));
        assert_eq!(data.identifier, None);
        assert_eq!(text(src, &arena, data.title), title);
    }

    #[test]
    fn forced_requires_dot() {
        let (_, found, loc) = scan_first_line("Prologue", Header::scan_forced);
        assert_eq!((found, loc), (None, 0));
    }
}
