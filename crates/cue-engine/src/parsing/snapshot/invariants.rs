use crate::{
    ast::{NodeId, NodeKind, WalkEvent, Walker},
    document::Document,
};

/// Validates structural invariants of a parsed document.
///
/// Asserts that:
/// - The root spans the whole source
/// - Every span is ordered and within the source bounds
/// - Every child lies inside its parent and after its previous sibling
/// - Parent and sibling links agree in both directions
/// - Inline spans sit only under a Stream or another inline span
/// - A Cue's direction is a PlainDirection or LyricDirection child of it
/// - A walk enters and exits every live arena node exactly once, nested
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    let n = doc.source().len();
    let root = doc.root();
    let root_span = doc.node(root).span;
    assert!(
        root_span.start == 0 && root_span.end == n,
        "root span {root_span:?} does not cover the source (len {n})"
    );

    let mut stack: Vec<NodeId> = vec![];
    let mut entered = 0usize;
    let mut walker = Walker::new(doc.arena(), root);

    loop {
        let event = match walker.try_step() {
            Ok(event) => event,
            Err(err) => panic!("{err}"),
        };
        match event {
            WalkEvent::Enter(id) => {
                check_node(doc, id, n);
                entered += 1;
                stack.push(id);
            }
            WalkEvent::Exit(id) => {
                let top = stack.pop();
                assert_eq!(top, Some(id), "exit of {id:?} does not match enter of {top:?}");
            }
            WalkEvent::Done => break,
        }
    }

    assert!(stack.is_empty(), "walk finished with open nodes {stack:?}");
    assert_eq!(
        entered,
        doc.node_count(),
        "walk reached {entered} nodes but the arena holds {}",
        doc.node_count()
    );
}

fn check_node(doc: &Document, id: NodeId, n: usize) {
    let node = doc.node(id);
    let span = node.span;
    assert!(
        span.start <= span.end && span.end <= n,
        "{} span out of bounds: {span:?} (source len: {n})",
        node.kind
    );

    if let Some(parent) = node.parent() {
        let outer = doc.node(parent).span;
        assert!(
            outer.contains(span),
            "{} {span:?} not contained in parent {} {outer:?}",
            node.kind,
            doc.node(parent).kind
        );
    }

    if node.kind.is_inline() {
        let parent = node.parent().map(|p| doc.node(p).kind);
        assert!(
            matches!(parent, Some(k) if k == NodeKind::Stream || k.is_inline()),
            "{} {span:?} is not inside a Stream (parent: {parent:?})",
            node.kind
        );
    }

    if let NodeKind::Cue(cue) = node.kind {
        let direction = doc.node(cue.direction);
        assert!(
            direction.kind.is_direction() && direction.parent() == Some(id),
            "Cue {span:?} points at {} as its direction",
            direction.kind
        );
    }

    let mut prev: Option<NodeId> = None;
    for child in doc.children(id) {
        let c = doc.node(child);
        assert_eq!(c.parent(), Some(id), "{} has a stale parent link", c.kind);
        assert_eq!(c.prev_sibling(), prev, "{} has a stale prev link", c.kind);
        if let Some(prev) = prev {
            let before = doc.node(prev).span;
            assert!(
                before.end <= c.span.start,
                "{} {:?} overlaps preceding sibling {before:?}",
                c.kind,
                c.span
            );
        }
        prev = Some(child);
    }
    assert_eq!(node.last_child(), prev, "{} has a stale last_child link", node.kind);
}
