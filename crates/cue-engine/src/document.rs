//! # Document
//!
//! Owns the source text together with the arena holding its parsed tree.
//! Dropping a `Document` tears the whole tree down at once.
//!
//! ## Failure contract
//!
//! Cue text cannot fail to parse. The only failure is running out of node
//! storage, and the supported response to that is fail-fast:
//! [`Document::parse`] and [`Document::parse_with`] log the error and abort
//! the process. Callers that cap the arena with
//! [`ParseOptions::max_nodes`] and want to handle exhaustion themselves use
//! [`Document::try_parse_with`].

use std::fmt::Write as _;

use crate::{
    ast::{Children, Node, NodeArena, NodeId, NodeKind, WalkEvent, Walker},
    error::ParseError,
    parsing::{ParseOptions, ParsedDoc, parse_document},
};

#[derive(Debug)]
pub struct Document {
    source: String,
    arena: NodeArena,
    root: NodeId,
}

impl Document {
    /// Parses with default options. Aborts on allocation failure.
    pub fn parse(source: impl Into<String>) -> Self {
        Self::parse_with(source, &ParseOptions::default())
    }

    /// Aborts on allocation failure.
    pub fn parse_with(source: impl Into<String>, options: &ParseOptions) -> Self {
        match Self::try_parse_with(source, options) {
            Ok(doc) => doc,
            Err(err) => {
                log::error!("aborting parse: {err}");
                std::process::abort();
            }
        }
    }

    pub fn try_parse_with(
        source: impl Into<String>,
        options: &ParseOptions,
    ) -> Result<Self, ParseError> {
        let source = source.into();
        let ParsedDoc { arena, root } = parse_document(&source, options)?;
        Ok(Self {
            source,
            arena,
            root,
        })
    }

    /// Wraps a hand-built tree, for tests that need shapes the parser never makes.
    #[cfg(test)]
    pub(crate) fn from_parts(source: impl Into<String>, arena: NodeArena, root: NodeId) -> Self {
        Self {
            source: source.into(),
            arena,
            root,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The Document node, spanning the whole source.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    /// The source text `id` covers.
    pub fn text(&self, id: NodeId) -> &str {
        let span = self.arena[id].span;
        self.source.get(span.start..span.end).unwrap_or_default()
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        self.arena.children(id)
    }

    /// Walks the whole tree.
    pub fn walker(&self) -> Walker<'_> {
        self.walk_from(self.root)
    }

    /// Walks the subtree rooted at `id`.
    pub fn walk_from(&self, id: NodeId) -> Walker<'_> {
        Walker::new(&self.arena, id)
    }

    /// Renders the tree one node per line as `Kind@start..end`, indented two
    /// spaces per level. Leaves are followed by their quoted text.
    pub fn describe(&self) -> String {
        self.describe_from(self.root)
    }

    pub fn describe_from(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut depth = 0usize;

        for event in self.walk_from(id) {
            match event {
                WalkEvent::Enter(id) => {
                    let node = &self.arena[id];
                    let _ = write!(
                        out,
                        "{:indent$}{}@{}..{}",
                        "",
                        label(&node.kind),
                        node.span.start,
                        node.span.end,
                        indent = depth * 2
                    );
                    if !node.has_children() && node.kind != NodeKind::Document {
                        let _ = write!(out, " {:?}", self.text(id));
                    }
                    out.push('\n');
                    depth += 1;
                }
                WalkEvent::Exit(_) => depth -= 1,
                WalkEvent::Done => break,
            }
        }
        out
    }
}

/// Node name plus the payload detail worth showing in a dump.
fn label(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Header(header) => format!("Header({})", header.kind.name()),
        NodeKind::Cue(cue) if cue.is_dual => "Cue(dual)".to_string(),
        other => other.name().to_string(),
    }
}
