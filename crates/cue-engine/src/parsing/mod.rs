pub mod blocks;
pub mod inline;
pub mod scanner;
pub mod snapshot;

#[cfg(test)]
mod tests;

use crate::{
    ast::{INITIAL_CAPACITY, NodeArena, NodeId},
    error::ParseError,
};

use blocks::{BlockBuilder, kinds::Cue};
use scanner::Scanner;

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Furthest offset from the start of a speaker name at which the `:`
    /// separator is still accepted.
    pub cue_name_bound: usize,
    /// Node capacity of the arena's first bucket.
    pub initial_capacity: usize,
    /// Recoverable cap on the number of nodes; `None` means unbounded.
    pub max_nodes: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            cue_name_bound: Cue::DEFAULT_NAME_BOUND,
            initial_capacity: INITIAL_CAPACITY,
            max_nodes: None,
        }
    }
}

#[derive(Debug)]
pub struct ParsedDoc {
    pub arena: NodeArena,
    pub root: NodeId,
}

/// Parses `source` into a tree rooted at a Document node spanning the whole
/// buffer. Blank lines produce nothing.
///
/// Malformed Cue text is never an error; the only failures are arena
/// allocation failures.
pub fn parse_document(source: &str, options: &ParseOptions) -> Result<ParsedDoc, ParseError> {
    let mut builder = BlockBuilder::new(source, options)?;
    let mut scanner = Scanner::new(source);

    while scanner.advance_to_next_line() < source.len() {
        if !scanner.is_at_eol() {
            builder.push_line(&mut scanner)?;
        }
    }

    let (arena, root) = builder.finish();
    log::debug!("parsed {} bytes into {} nodes", source.len(), arena.len());
    Ok(ParsedDoc { arena, root })
}
