//! # Node Arena
//!
//! Bump allocator for tree nodes. Storage is a list of buckets: the first
//! holds `initial_capacity` nodes and every later bucket is as large as all
//! previous buckets combined, so total capacity doubles each time a bucket
//! is appended. Node handles are global allocation indices, which map to a
//! `(bucket, offset)` pair arithmetically.
//!
//! ## Release discipline
//!
//! Nodes are only ever released in LIFO order:
//!
//! - [`NodeArena::mark`] records the current top of the stack
//! - [`NodeArena::discard_to`] drops everything allocated since a mark
//! - [`NodeArena::release`] drops a single node, only if it is the top
//! - [`NodeArena::commit`] raises the watermark; nothing below it can be
//!   discarded again
//!
//! Discarded nodes must already be unlinked from every live node.

use std::ops::{Index, IndexMut};

use crate::error::ArenaError;

use super::{
    node::{Node, NodeId, NodeKind},
    span::Span,
};

/// Default size of the first bucket.
pub const INITIAL_CAPACITY: usize = 16;

/// A position in the allocation stack returned by [`NodeArena::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArenaMark(usize);

#[derive(Debug)]
pub struct NodeArena {
    buckets: Vec<Vec<Node>>,
    initial_capacity: usize,
    capacity: usize,
    len: usize,
    watermark: usize,
    limit: Option<usize>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            buckets: Vec::new(),
            initial_capacity: initial_capacity.max(1),
            capacity: 0,
            len: 0,
            watermark: 0,
            limit: None,
        }
    }

    /// Caps the number of live nodes; allocation past the cap fails with
    /// [`ArenaError::Exhausted`].
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total node slots across all buckets.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Allocates a detached node at the top of the stack.
    pub fn alloc(&mut self, kind: NodeKind, span: Span) -> Result<NodeId, ArenaError> {
        let limit = self.limit.unwrap_or(u32::MAX as usize);
        if self.len >= limit {
            return Err(ArenaError::Exhausted { limit });
        }

        let (bucket, offset) = self.locate(self.len);
        if bucket == self.buckets.len() {
            self.push_bucket()?;
        }

        let slab = &mut self.buckets[bucket];
        debug_assert_eq!(slab.len(), offset, "bucket fill cursor out of sync");
        slab.push(Node::new(kind, span));

        let id = NodeId(self.len as u32);
        self.len += 1;
        Ok(id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if id.index() >= self.len {
            return None;
        }
        let (bucket, offset) = self.locate(id.index());
        self.buckets.get(bucket)?.get(offset)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if id.index() >= self.len {
            return None;
        }
        let (bucket, offset) = self.locate(id.index());
        self.buckets.get_mut(bucket)?.get_mut(offset)
    }

    pub fn mark(&self) -> ArenaMark {
        ArenaMark(self.len)
    }

    /// Everything allocated so far becomes permanent.
    pub fn commit(&mut self) {
        self.watermark = self.len;
    }

    /// Drops every node allocated since `mark`.
    ///
    /// Rejected (and a no-op) when `mark` is below the watermark or beyond
    /// the live top.
    pub fn discard_to(&mut self, mark: ArenaMark) -> Result<(), ArenaError> {
        let ArenaMark(mark) = mark;
        if mark < self.watermark || mark > self.len {
            return Err(ArenaError::InvalidMark {
                mark,
                watermark: self.watermark,
                len: self.len,
            });
        }

        while self.len > mark {
            let (bucket, _) = self.locate(self.len - 1);
            let start = self.bucket_start(bucket);
            let keep = mark.max(start) - start;
            let slab = &mut self.buckets[bucket];
            let removed = slab.len() - keep;
            slab.truncate(keep);
            self.len -= removed;
        }
        Ok(())
    }

    /// Releases `id` if it is the most recent allocation.
    ///
    /// Any other node stays allocated until the arena is dropped.
    pub fn release(&mut self, id: NodeId) -> Result<(), ArenaError> {
        if id.index() + 1 != self.len {
            log::warn!(
                "arena failed to release {id:?}: not at the top of the stack (len {})",
                self.len
            );
            return Err(ArenaError::NotTopOfStack { id });
        }
        self.discard_to(ArenaMark(id.index()))
    }

    fn push_bucket(&mut self) -> Result<(), ArenaError> {
        let size = if self.buckets.is_empty() {
            self.initial_capacity
        } else {
            self.capacity
        };
        let mut slab = Vec::new();
        slab.try_reserve_exact(size)
            .map_err(|_| ArenaError::OutOfMemory { requested: size })?;
        self.buckets.push(slab);
        self.capacity += size;
        Ok(())
    }

    fn bucket_start(&self, bucket: usize) -> usize {
        if bucket == 0 {
            0
        } else {
            self.initial_capacity << (bucket - 1)
        }
    }

    /// Maps a global index to `(bucket, offset)`.
    fn locate(&self, index: usize) -> (usize, usize) {
        let q = index / self.initial_capacity;
        if q == 0 {
            return (0, index);
        }
        let bucket = (usize::BITS - q.leading_zeros()) as usize;
        (bucket, index - self.bucket_start(bucket))
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?} (arena holds {} nodes)", self.len),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        let len = self.len;
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node handle {id:?} (arena holds {len} nodes)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn literal(arena: &mut NodeArena, at: usize) -> NodeId {
        arena.alloc(NodeKind::Literal, Span::new(at, at + 1)).unwrap()
    }

    #[test]
    fn buckets_double_total_capacity() {
        let mut arena = NodeArena::with_capacity(4);
        for i in 0..4 {
            literal(&mut arena, i);
        }
        assert_eq!((arena.bucket_count(), arena.capacity()), (1, 4));

        literal(&mut arena, 4);
        assert_eq!((arena.bucket_count(), arena.capacity()), (2, 8));

        for i in 5..9 {
            literal(&mut arena, i);
        }
        assert_eq!((arena.bucket_count(), arena.capacity()), (3, 16));
    }

    #[test]
    fn handles_stay_valid_across_buckets() {
        let mut arena = NodeArena::with_capacity(2);
        let ids: Vec<_> = (0..40).map(|i| literal(&mut arena, i)).collect();
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(arena[*id].span, Span::new(i, i + 1));
        }
    }

    #[test]
    fn release_only_pops_the_top() {
        let mut arena = NodeArena::new();
        let a = literal(&mut arena, 0);
        let b = literal(&mut arena, 1);

        assert_eq!(
            arena.release(a),
            Err(ArenaError::NotTopOfStack { id: a })
        );
        assert_eq!(arena.len(), 2);

        arena.release(b).unwrap();
        assert_eq!(arena.len(), 1);
        assert!(arena.get(b).is_none());

        // The freed slot is reused by the next allocation.
        let c = literal(&mut arena, 5);
        assert_eq!(c, b);
        assert_eq!(arena[c].span, Span::new(5, 6));
    }

    #[test]
    fn discard_to_mark_spans_buckets() {
        let mut arena = NodeArena::with_capacity(2);
        literal(&mut arena, 0);
        let mark = arena.mark();
        for i in 1..10 {
            literal(&mut arena, i);
        }
        arena.discard_to(mark).unwrap();
        assert_eq!(arena.len(), 1);

        // Refilling after a discard lands in the retained slabs.
        let capacity = arena.capacity();
        for i in 1..10 {
            literal(&mut arena, i);
        }
        assert_eq!(arena.capacity(), capacity);
        assert_eq!(arena.len(), 10);
    }

    #[test]
    fn discard_below_watermark_is_rejected() {
        let mut arena = NodeArena::new();
        let mark = arena.mark();
        literal(&mut arena, 0);
        arena.commit();

        assert!(matches!(
            arena.discard_to(mark),
            Err(ArenaError::InvalidMark { .. })
        ));
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn limit_exhausts_allocation() {
        let mut arena = NodeArena::new().with_limit(Some(2));
        literal(&mut arena, 0);
        literal(&mut arena, 1);
        assert_eq!(
            arena.alloc(NodeKind::Literal, Span::new(2, 3)),
            Err(ArenaError::Exhausted { limit: 2 })
        );
    }
}
