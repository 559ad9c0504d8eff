use crate::parsing::scanner::Scanner;

use super::{
    delimiter::{DelimiterKind, DelimiterToken},
    kinds::{Comment, Emphasis, Parenthetical, Reference},
};

/// Scans forward to the next delimiter and consumes it.
///
/// Escaped bytes are skipped. `(` and `)` are delimiters only when `parens`
/// is set. A comment token covers the marker plus any following whitespace
/// and leaves the scanner at the end of the text.
pub fn next_token(s: &mut Scanner<'_>, parens: bool) -> Option<DelimiterToken> {
    while let Some(b) = s.peek() {
        let at = s.loc();
        if s.is_escaped(at) {
            s.bump();
            continue;
        }

        let token = match b {
            Emphasis::MARKER if s.peek_at(at + 1) == Some(Emphasis::MARKER) => {
                Some(DelimiterToken::new(DelimiterKind::Strong, true, at, Emphasis::STRONG.len()))
            }
            Emphasis::MARKER => Some(DelimiterToken::new(DelimiterKind::Emphasis, true, at, 1)),
            Reference::OPEN => Some(DelimiterToken::new(DelimiterKind::Reference, true, at, 1)),
            Reference::CLOSE => Some(DelimiterToken::new(DelimiterKind::Reference, false, at, 1)),
            Parenthetical::OPEN if parens => {
                Some(DelimiterToken::new(DelimiterKind::Parenthetical, true, at, 1))
            }
            Parenthetical::CLOSE if parens => {
                Some(DelimiterToken::new(DelimiterKind::Parenthetical, false, at, 1))
            }
            _ if s.eat(Comment::MARKER) => {
                let end = s.advance_to_first_nonspace();
                s.set_loc(s.ewc());
                return Some(DelimiterToken::new(DelimiterKind::Comment, true, at, end - at));
            }
            _ => None,
        };

        match token {
            Some(tok) => {
                s.set_loc(tok.span.end);
                return Some(tok);
            }
            None => s.bump(),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Span;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tokens(text: &str, parens: bool) -> Vec<(DelimiterKind, bool, usize, usize)> {
        let mut s = Scanner::over(text, Span::new(0, text.len()));
        std::iter::from_fn(|| next_token(&mut s, parens))
            .map(|t| (t.kind, t.can_open, t.span.start, t.span.end))
            .collect()
    }

    #[test]
    fn recognizes_each_delimiter() {
        use DelimiterKind::*;
        assert_eq!(
            tokens("*a* **b** [c] (d)", true),
            vec![
                (Emphasis, true, 0, 1),
                (Emphasis, true, 2, 3),
                (Strong, true, 4, 6),
                (Strong, true, 7, 9),
                (Reference, true, 10, 11),
                (Reference, false, 12, 13),
                (Parenthetical, true, 14, 15),
                (Parenthetical, false, 16, 17),
            ]
        );
    }

    #[test]
    fn parens_are_text_by_default() {
        assert!(tokens("(aside)", false).is_empty());
    }

    #[rstest]
    #[case(r"\*not\*")]
    #[case(r"\[not]")]
    #[case(r"a \// b")]
    fn escaped_delimiters_are_skipped(#[case] text: &str) {
        let found = tokens(text, true);
        assert!(
            found.iter().all(|t| t.0 == DelimiterKind::Reference && !t.1),
            "unexpected tokens {found:?}"
        );
    }

    #[test]
    fn comment_consumes_marker_and_padding() {
        assert_eq!(
            tokens("a *b // note *c*", false),
            vec![
                (DelimiterKind::Emphasis, true, 2, 3),
                (DelimiterKind::Comment, true, 5, 8),
            ]
        );
    }

    #[test]
    fn single_slash_is_text() {
        assert!(tokens("either/or", false).is_empty());
    }
}
