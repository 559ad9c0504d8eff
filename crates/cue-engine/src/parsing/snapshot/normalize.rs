use serde::Serialize;

use crate::{
    ast::{NodeId, NodeKind},
    document::Document,
};

/// A node with its kind, span, leaf text and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snap {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub span: (usize, usize),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Snap>,
}

pub fn normalize(doc: &Document) -> Snap {
    snap_node(doc, doc.root())
}

fn snap_node(doc: &Document, id: NodeId) -> Snap {
    let node = doc.node(id);
    let children: Vec<Snap> = doc.children(id).map(|c| snap_node(doc, c)).collect();

    let detail = match node.kind {
        NodeKind::Header(header) => Some(header.kind.name().to_string()),
        NodeKind::Cue(cue) if cue.is_dual => Some("dual".to_string()),
        _ => None,
    };
    let text = (children.is_empty() && node.kind != NodeKind::Document)
        .then(|| doc.text(id).to_string());

    Snap {
        kind: node.kind.name().to_string(),
        detail,
        span: (node.span.start, node.span.end),
        text,
        children,
    }
}
