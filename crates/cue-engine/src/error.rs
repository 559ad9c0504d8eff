use thiserror::Error;

use crate::ast::NodeId;

/// Failures at the node allocation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("node arena exhausted after {limit} nodes")]
    Exhausted { limit: usize },

    #[error("failed to reserve a bucket of {requested} nodes")]
    OutOfMemory { requested: usize },

    #[error("cannot release node {id:?}: it is not the most recent allocation")]
    NotTopOfStack { id: NodeId },

    #[error("cannot discard to mark {mark}: live range is {watermark}..{len}")]
    InvalidMark {
        mark: usize,
        watermark: usize,
        len: usize,
    },
}

/// Structural violations found while walking a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("malformed tree: node {node:?} has no sibling and no parent")]
    Malformed { node: NodeId },
}

/// Errors surfaced by [`Document::try_parse_with`](crate::Document::try_parse_with).
///
/// Malformed Cue text never produces one of these; it degrades to
/// Description blocks instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Arena(#[from] ArenaError),
}
