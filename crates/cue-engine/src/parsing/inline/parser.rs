use crate::{
    ast::{NodeArena, NodeId, NodeKind, Span},
    error::ArenaError,
    parsing::scanner::Scanner,
};

use super::{
    delimiter::{DelimiterKind, DelimiterStack, Resolution},
    tokenizer::next_token,
};

/// Resolves inline spans inside a text node and grafts them beneath it.
///
/// The delimiter stack is reused across calls; each call starts from an
/// empty stack.
#[derive(Debug, Default)]
pub struct InlineParser {
    stack: DelimiterStack,
}

impl InlineParser {
    pub fn new() -> Self {
        Self {
            stack: DelimiterStack::new(),
        }
    }

    /// Parses the text covered by `target` (normally a Stream) and appends
    /// the resulting Literal and span nodes as its children.
    ///
    /// Parenthetical delimiters are only recognized when `parens` is set.
    pub fn parse(
        &mut self,
        src: &str,
        arena: &mut NodeArena,
        target: NodeId,
        parens: bool,
    ) -> Result<(), ArenaError> {
        let span = arena[target].span;
        let mut s = Scanner::over(src, span);
        self.scan_for_tokens(&mut s, parens);
        self.construct(arena, target, span.end)
    }

    fn scan_for_tokens(&mut self, s: &mut Scanner<'_>, parens: bool) {
        self.stack.reset();
        while let Some(tok) = next_token(s, parens) {
            if tok.kind == DelimiterKind::Comment {
                self.stack.insert_closed(tok, s.ewc());
                break;
            }
            self.stack.insert(tok);
        }
    }

    /// Replays the resolved tokens in order. Text between tokens becomes
    /// Literal children of whichever span is open; unresolved tokens are
    /// folded into that text.
    fn construct(
        &self,
        arena: &mut NodeArena,
        target: NodeId,
        end: usize,
    ) -> Result<(), ArenaError> {
        let mut active = target;
        let mut last = arena[target].span.start;

        for tok in self.stack.tokens().iter().filter(|t| t.is_resolved()) {
            if tok.span.start > last {
                append_literal(arena, active, last, tok.span.start)?;
            }

            match tok.resolution {
                Resolution::Enter => {
                    let node = arena.alloc(tok.kind.node_kind(), tok.span)?;
                    arena.append_child(active, node);
                    active = node;
                }
                Resolution::Exit => {
                    arena.extend_end(active, tok.span.end, target);
                    active = arena[active].parent().unwrap_or(target);
                }
                Resolution::Unresolved => {}
            }
            last = tok.span.end;
        }

        if last < end {
            append_literal(arena, active, last, end)?;
        }
        Ok(())
    }
}

fn append_literal(
    arena: &mut NodeArena,
    parent: NodeId,
    start: usize,
    end: usize,
) -> Result<(), ArenaError> {
    let literal = arena.alloc(NodeKind::Literal, Span::new(start, end))?;
    arena.append_child(parent, literal);
    Ok(())
}
