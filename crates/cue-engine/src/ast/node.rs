use std::fmt;

use serde::Serialize;

use super::span::Span;

/// Stable handle to a node stored in a [`NodeArena`](super::NodeArena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in allocation order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which keyword introduced a header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HeaderKind {
    Act,
    Scene,
    Page,
    Frame,
    /// A `.`-prefixed header with an arbitrary keyword.
    Forced,
}

impl HeaderKind {
    pub fn name(self) -> &'static str {
        match self {
            HeaderKind::Act => "Act",
            HeaderKind::Scene => "Scene",
            HeaderKind::Page => "Page",
            HeaderKind::Frame => "Frame",
            HeaderKind::Forced => "Forced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderData {
    pub kind: HeaderKind,
    pub keyword: NodeId,
    pub identifier: Option<NodeId>,
    pub title: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueData {
    /// Set for `^`-prefixed cues spoken simultaneously with the previous group.
    pub is_dual: bool,
    pub name: NodeId,
    pub direction: NodeId,
}

/// The type of a node, carrying the payload only the header and cue
/// variants need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Document,

    // Block level
    Header(HeaderData),
    Description,
    SimultaneousCues,
    Facsimile,
    ThematicBreak,
    End,

    Cue(CueData),
    LyricDirection,
    PlainDirection,
    Line,
    Stream,

    Keyword,
    Identifier,
    Title,
    Name,
    Url,

    // Inlines
    Literal,
    Emphasis,
    Strong,
    Reference,
    Parenthetical,
    Comment,
}

impl NodeKind {
    /// Stable human-readable name used by tree dumps and snapshots.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Header(_) => "Header",
            NodeKind::Description => "Description",
            NodeKind::SimultaneousCues => "SimultaneousCues",
            NodeKind::Facsimile => "Facsimile",
            NodeKind::ThematicBreak => "ThematicBreak",
            NodeKind::End => "End",
            NodeKind::Cue(_) => "Cue",
            NodeKind::LyricDirection => "LyricDirection",
            NodeKind::PlainDirection => "PlainDirection",
            NodeKind::Line => "Line",
            NodeKind::Stream => "Stream",
            NodeKind::Keyword => "Keyword",
            NodeKind::Identifier => "Identifier",
            NodeKind::Title => "Title",
            NodeKind::Name => "Name",
            NodeKind::Url => "Url",
            NodeKind::Literal => "Literal",
            NodeKind::Emphasis => "Emphasis",
            NodeKind::Strong => "Strong",
            NodeKind::Reference => "Reference",
            NodeKind::Parenthetical => "Parenthetical",
            NodeKind::Comment => "Comment",
        }
    }

    pub fn is_direction(&self) -> bool {
        matches!(self, NodeKind::PlainDirection | NodeKind::LyricDirection)
    }

    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            NodeKind::Literal
                | NodeKind::Emphasis
                | NodeKind::Strong
                | NodeKind::Reference
                | NodeKind::Parenthetical
                | NodeKind::Comment
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tree node. Links are arena handles; the parent link is a back-reference
/// and never implies ownership.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) last_child: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) prev: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            parent: None,
            first_child: None,
            last_child: None,
            next: None,
            prev: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.last_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next
    }

    pub fn prev_sibling(&self) -> Option<NodeId> {
        self.prev
    }

    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }
}
