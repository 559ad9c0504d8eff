//! # Document Tree
//!
//! Arena-backed node storage for parsed Cue documents.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges into the source buffer
//! - **`node`**: `Node`, `NodeId` handles and the tagged `NodeKind`
//! - **`arena`**: `NodeArena` bucketed bump allocator with LIFO rollback
//! - **`tree`**: parent/sibling link maintenance on top of the arena
//! - **`walker`**: depth-first enter/exit traversal
//!
//! ## Key Invariants
//!
//! - A parent's span covers the union of its children's spans
//! - Handles are only invalidated by rolling the arena back past them
//! - The tree is single-writer while parsing and read-only afterwards

pub mod arena;
pub mod node;
pub mod span;
pub mod tree;
pub mod walker;

pub use arena::{ArenaMark, INITIAL_CAPACITY, NodeArena};
pub use node::{CueData, HeaderData, HeaderKind, Node, NodeId, NodeKind};
pub use span::Span;
pub use tree::Children;
pub use walker::{WalkEvent, Walker};
