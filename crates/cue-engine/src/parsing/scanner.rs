//! # Scanner
//!
//! Line and cursor primitives over the source buffer.
//!
//! The scanner tracks the raw bounds of the current line (`bol`, `eol`), the
//! whitespace-trimmed bounds (`wc`, `ewc`) and a cursor `loc` shared by every
//! block and inline sub-scanner. Only a fixed set of ASCII bytes is
//! structural, so scanning bytes is safe for any UTF-8 input: continuation
//! bytes never collide with those values.
//!
//! Scans never partially consume on failure. Block scanners that don't
//! match restore `loc` before returning.

use crate::ast::Span;

/// Bytes that end a line: LF, VT, FF and CR.
pub fn is_newline(b: u8) -> bool {
    matches!(b, b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || is_newline(b)
}

pub const ESCAPE: u8 = b'\\';

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src: &'a [u8],
    bol: usize,
    eol: usize,
    next_bol: usize,
    wc: usize,
    ewc: usize,
    loc: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src: src.as_bytes(),
            bol: 0,
            eol: 0,
            next_bol: 0,
            wc: 0,
            ewc: 0,
            loc: 0,
        }
    }

    /// A scanner confined to `span`, used for inline scanning of a node's
    /// text. The span is treated as an already-trimmed line.
    pub fn over(src: &'a str, span: Span) -> Self {
        Self {
            src: src.as_bytes(),
            bol: span.start,
            eol: span.end,
            next_bol: span.end,
            wc: span.start,
            ewc: span.end,
            loc: span.start,
        }
    }

    pub fn len(&self) -> usize {
        self.src.len()
    }

    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }

    pub fn bol(&self) -> usize {
        self.bol
    }

    pub fn eol(&self) -> usize {
        self.eol
    }

    pub fn wc(&self) -> usize {
        self.wc
    }

    pub fn ewc(&self) -> usize {
        self.ewc
    }

    pub fn loc(&self) -> usize {
        self.loc
    }

    pub fn set_loc(&mut self, loc: usize) {
        self.loc = loc;
    }

    /// Raw bounds of the current line, terminator excluded.
    pub fn line(&self) -> Span {
        Span::new(self.bol, self.eol)
    }

    /// Whitespace-trimmed bounds of the current line.
    pub fn trimmed(&self) -> Span {
        Span::new(self.wc, self.ewc)
    }

    /// Moves to the line after the current one and returns its start.
    ///
    /// The returned offset equals the buffer length once every line has been
    /// consumed.
    pub fn advance_to_next_line(&mut self) -> usize {
        self.bol = self.next_bol;
        self.eol = self.bol;
        while self.eol < self.src.len() && !is_newline(self.src[self.eol]) {
            self.eol += 1;
        }
        self.next_bol = if self.eol < self.src.len() {
            self.eol + 1
        } else {
            self.eol
        };

        self.trim_whitespace();
        self.bol
    }

    pub fn is_at_eol(&self) -> bool {
        self.loc == self.ewc
    }

    /// Recomputes `wc`/`ewc` from the raw line bounds and resets the cursor
    /// to the trimmed start.
    pub fn trim_whitespace(&mut self) {
        self.ewc = self.eol;
        self.loc = self.bol;
        self.advance_to_first_nonspace();
        self.wc = self.loc;

        self.loc = self.eol;
        self.backtrack_to_first_nonspace();
        self.ewc = self.loc;

        self.loc = self.wc;
    }

    pub fn advance_to_first_nonspace(&mut self) -> usize {
        while self.loc < self.ewc && is_whitespace(self.src[self.loc]) {
            self.loc += 1;
        }
        self.loc
    }

    pub fn backtrack_to_first_nonspace(&mut self) -> usize {
        while self.loc > self.wc && is_whitespace(self.src[self.loc - 1]) {
            self.loc -= 1;
        }
        self.loc
    }

    /// Advances to the first unescaped `-`, or to the trimmed end.
    pub fn advance_to_hyphen(&mut self) -> usize {
        while self.loc < self.ewc && !self.is_unescaped(self.loc, b'-') {
            self.loc += 1;
        }
        self.loc
    }

    /// Advances to the first unescaped `:` at most `bound` bytes past the
    /// cursor. When none is found the cursor lands on the trimmed end.
    pub fn advance_to_colon(&mut self, bound: usize) -> usize {
        let start = self.loc;
        while self.loc < self.ewc {
            if self.loc - start > bound {
                self.loc = self.ewc;
                break;
            }
            if self.is_unescaped(self.loc, b':') {
                break;
            }
            self.loc += 1;
        }
        self.loc
    }

    /// True when the byte before `pos` is a backslash.
    pub fn is_escaped(&self, pos: usize) -> bool {
        pos > 0 && self.src.get(pos - 1) == Some(&ESCAPE)
    }

    pub fn is_unescaped(&self, pos: usize, byte: u8) -> bool {
        self.src.get(pos) == Some(&byte) && !self.is_escaped(pos)
    }

    /// The byte under the cursor, if still inside the trimmed line.
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(self.loc)
    }

    pub fn peek_at(&self, pos: usize) -> Option<u8> {
        if pos < self.ewc {
            Some(self.src[pos])
        } else {
            None
        }
    }

    /// Consumes `pat` if the trimmed line continues with it at the cursor.
    pub fn eat(&mut self, pat: &[u8]) -> bool {
        let end = self.loc + pat.len();
        if end <= self.ewc && &self.src[self.loc..end] == pat {
            self.loc = end;
            true
        } else {
            false
        }
    }

    /// Consumes a single unescaped `byte` at the cursor.
    pub fn eat_unescaped(&mut self, byte: u8) -> bool {
        if self.loc < self.ewc && self.is_unescaped(self.loc, byte) {
            self.loc += 1;
            true
        } else {
            false
        }
    }

    pub fn bump(&mut self) {
        if self.loc < self.ewc {
            self.loc += 1;
        }
    }
}
