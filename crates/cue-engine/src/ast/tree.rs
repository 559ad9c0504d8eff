//! Link maintenance for nodes stored in a [`NodeArena`].
//!
//! Children form a doubly-linked sibling list hanging off `first_child` /
//! `last_child`, with a non-owning `parent` back-reference. All operations
//! are O(1) except the ancestor walk in [`NodeArena::extend_end`].

use super::{arena::NodeArena, node::NodeId, span::Span};

impl NodeArena {
    /// Appends `child` as the last child of `parent`, growing the parent's
    /// span to cover it.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev = self[parent].last_child;
        {
            let c = &mut self[child];
            c.parent = Some(parent);
            c.prev = prev;
            c.next = None;
        }
        match prev {
            Some(prev) => self[prev].next = Some(child),
            None => self[parent].first_child = Some(child),
        }

        let child_span = self[child].span;
        let p = &mut self[parent];
        p.last_child = Some(child);
        p.span = p.span.cover(child_span);
    }

    /// Detaches `node` from its parent and siblings. Its own children stay
    /// attached to it.
    pub fn unlink(&mut self, node: NodeId) {
        let (parent, prev, next) = {
            let n = &self[node];
            (n.parent, n.prev, n.next)
        };

        if let Some(parent) = parent {
            let p = &mut self[parent];
            if p.first_child == Some(node) {
                p.first_child = next;
            }
            if p.last_child == Some(node) {
                p.last_child = prev;
            }
        }
        if let Some(prev) = prev {
            self[prev].next = next;
        }
        if let Some(next) = next {
            self[next].prev = prev;
        }

        let n = &mut self[node];
        n.parent = None;
        n.prev = None;
        n.next = None;
    }

    /// Grows `node`'s span to include `other`'s.
    pub fn extend_to_include(&mut self, node: NodeId, other: NodeId) {
        let span = self[other].span;
        let n = &mut self[node];
        n.span = n.span.cover(span);
    }

    /// Moves `node`'s end to at least `end`, then does the same for each
    /// ancestor up to and including `stop`.
    pub fn extend_end(&mut self, node: NodeId, end: usize, stop: NodeId) {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let n = &mut self[id];
            n.span.end = n.span.end.max(end);
            if id == stop {
                break;
            }
            cursor = n.parent;
        }
    }

    pub fn set_span(&mut self, node: NodeId, span: Span) {
        self[node].span = span;
    }

    /// Iterates the direct children of `node` in order.
    pub fn children(&self, node: NodeId) -> Children<'_> {
        Children {
            arena: self,
            next: self[node].first_child,
        }
    }
}

pub struct Children<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.arena[id].next;
        Some(id)
    }
}
