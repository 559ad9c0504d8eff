//! # Delimiter Stack
//!
//! Bracket matching for inline spans, in the style of CommonMark's emphasis
//! resolution. Tokens are pushed left to right; a closer looks back for the
//! nearest openable, unresolved token of its own kind and, on a match, both
//! are marked. The stack is append-only, so the resolved tokens replayed in
//! order describe a properly nested span tree.
//!
//! ## Precedence
//!
//! [`DelimiterKind`] is ordered. The backward scan stops at the first token of
//! a *higher* kind, so a closer never matches across an unresolved opener
//! that outranks it:
//!
//! ```text
//! Emphasis < Strong < Reference < Parenthetical < Comment
//! ```
//!
//! ## Lower bound
//!
//! Everything below `lower_bound` is resolved and can never match again.
//! When the opener at the bound is matched the bound moves past the resolved
//! run, which keeps matching amortized linear.

use crate::ast::{NodeKind, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DelimiterKind {
    Emphasis,
    Strong,
    Reference,
    Parenthetical,
    Comment,
}

impl DelimiterKind {
    pub fn node_kind(self) -> NodeKind {
        match self {
            DelimiterKind::Emphasis => NodeKind::Emphasis,
            DelimiterKind::Strong => NodeKind::Strong,
            DelimiterKind::Reference => NodeKind::Reference,
            DelimiterKind::Parenthetical => NodeKind::Parenthetical,
            DelimiterKind::Comment => NodeKind::Comment,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Unresolved,
    Enter,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterToken {
    pub kind: DelimiterKind,
    pub can_open: bool,
    pub span: Span,
    pub resolution: Resolution,
}

impl DelimiterToken {
    pub fn new(kind: DelimiterKind, can_open: bool, start: usize, len: usize) -> Self {
        Self {
            kind,
            can_open,
            span: Span::new(start, start + len),
            resolution: Resolution::Unresolved,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution != Resolution::Unresolved
    }
}

#[derive(Debug, Default)]
pub struct DelimiterStack {
    tokens: Vec<DelimiterToken>,
    lower_bound: usize,
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self {
            tokens: Vec::with_capacity(8),
            lower_bound: 0,
        }
    }

    /// Empties the stack, keeping its allocation.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.lower_bound = 0;
    }

    pub fn tokens(&self) -> &[DelimiterToken] {
        &self.tokens
    }

    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// Matches `tok` against the stack. A matched token is pushed as an exit;
    /// an unmatched one is pushed only if it can open, otherwise dropped.
    pub fn insert(&mut self, mut tok: DelimiterToken) {
        match self.find_opener(&tok) {
            Some(idx) => {
                self.tokens[idx].resolution = Resolution::Enter;
                tok.resolution = Resolution::Exit;
                self.tokens.push(tok);

                if idx == self.lower_bound {
                    while self
                        .tokens
                        .get(self.lower_bound)
                        .is_some_and(DelimiterToken::is_resolved)
                    {
                        self.lower_bound += 1;
                    }
                }
            }
            None if tok.can_open => self.tokens.push(tok),
            None => {}
        }
    }

    /// Pushes a self-contained span: `open` as an enter and a zero-length
    /// exit at `end`.
    pub fn insert_closed(&mut self, mut open: DelimiterToken, end: usize) {
        open.resolution = Resolution::Enter;
        let mut close = DelimiterToken::new(open.kind, false, end, 0);
        close.resolution = Resolution::Exit;
        self.tokens.push(open);
        self.tokens.push(close);
    }

    /// Nearest openable, unresolved token of the same kind above the lower
    /// bound, unless a higher kind intervenes.
    fn find_opener(&self, tok: &DelimiterToken) -> Option<usize> {
        for idx in (self.lower_bound..self.tokens.len()).rev() {
            let p = &self.tokens[idx];
            if p.kind == tok.kind && p.can_open && !p.is_resolved() {
                return Some(idx);
            }
            if p.kind > tok.kind {
                break;
            }
        }
        None
    }
}
