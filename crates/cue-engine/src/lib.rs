//! # cue-engine
//!
//! Parses the line-oriented Cue screenplay markup into an arena-allocated
//! document tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Block classifier → Container resolver → Inline builder
//!          (lines)   (one block/line)   (attach or merge)    (delimiter stack)
//! ```
//!
//! Every node lives in the [`NodeArena`] owned by the [`Document`]; nodes refer
//! to each other by [`NodeId`]. Consumers traverse the finished tree with a
//! [`Walker`], which emits an enter and an exit event for every node.
//!
//! ## Quick Start
//!
//! ```
//! use cue_engine::{Document, NodeKind};
//!
//! let doc = Document::parse("JOHN: Hello there");
//! let group = doc.children(doc.root()).next().unwrap();
//! assert!(matches!(doc.node(group).kind, NodeKind::SimultaneousCues));
//! ```

pub mod ast;
pub mod document;
pub mod error;
pub mod outline;
pub mod parsing;

pub use ast::{
    ArenaMark, CueData, HeaderData, HeaderKind, Node, NodeArena, NodeId, NodeKind, Span,
    WalkEvent, Walker,
};
pub use document::Document;
pub use error::{ArenaError, ParseError, TreeError};
pub use parsing::ParseOptions;
