//! # Tree Walker
//!
//! Depth-first iteration over a finished tree. Every node is visited twice:
//! once on the way down ([`WalkEvent::Enter`]) and once on the way back up
//! ([`WalkEvent::Exit`]), leaves included. After the walked root is exited the
//! walker reports [`WalkEvent::Done`] forever.
//!
//! ```text
//! Document            Enter(Document)
//! └── Description       Enter(Description)
//!     └── Stream          Enter(Stream)
//!                         Exit(Stream)
//!                       Exit(Description)
//!                     Exit(Document)
//!                     Done
//! ```
//!
//! The walker holds the event it just returned and the one it will return
//! next; each step derives the following event from the current one.

use crate::error::TreeError;

use super::{arena::NodeArena, node::NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    Enter(NodeId),
    Exit(NodeId),
    Done,
}

impl WalkEvent {
    pub fn node(self) -> Option<NodeId> {
        match self {
            WalkEvent::Enter(id) | WalkEvent::Exit(id) => Some(id),
            WalkEvent::Done => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    None,
    At(WalkEvent),
}

pub struct Walker<'a> {
    arena: &'a NodeArena,
    root: NodeId,
    current: State,
    next: State,
}

impl<'a> Walker<'a> {
    pub fn new(arena: &'a NodeArena, root: NodeId) -> Self {
        Self {
            arena,
            root,
            current: State::None,
            next: State::At(WalkEvent::Enter(root)),
        }
    }

    /// The node of the most recently returned event.
    pub fn current(&self) -> Option<NodeId> {
        match self.current {
            State::At(event) => event.node(),
            State::None => None,
        }
    }

    /// Advances the walk, reporting a tree whose links do not lead back to
    /// the root as an error.
    pub fn try_step(&mut self) -> Result<WalkEvent, TreeError> {
        self.current = self.next;
        let event = match self.current {
            State::At(event) => event,
            State::None => WalkEvent::Done,
        };

        self.next = State::At(match event {
            WalkEvent::Done => WalkEvent::Done,
            WalkEvent::Enter(node) => match self.arena[node].first_child {
                Some(child) => WalkEvent::Enter(child),
                None => WalkEvent::Exit(node),
            },
            WalkEvent::Exit(node) if node == self.root => WalkEvent::Done,
            WalkEvent::Exit(node) => {
                let n = &self.arena[node];
                match (n.next, n.parent) {
                    (Some(sibling), _) => WalkEvent::Enter(sibling),
                    (None, Some(parent)) => WalkEvent::Exit(parent),
                    (None, None) => return Err(TreeError::Malformed { node }),
                }
            }
        });

        Ok(event)
    }

    /// Advances the walk.
    ///
    /// # Panics
    /// Panics if the tree is malformed; that is a construction bug, not an
    /// input error.
    pub fn step(&mut self) -> WalkEvent {
        match self.try_step() {
            Ok(event) => event,
            Err(err) => {
                log::error!("{err}");
                panic!("{err}");
            }
        }
    }
}

impl Iterator for Walker<'_> {
    type Item = WalkEvent;

    fn next(&mut self) -> Option<WalkEvent> {
        match self.step() {
            WalkEvent::Done => None,
            event => Some(event),
        }
    }
}
