//! # Outline
//!
//! Read-only summaries of a parsed [`Document`]: a table of contents built
//! from headers and references, per-kind header counts, and the offsets at
//! which each speaker is cued.
//!
//! Everything here is collected with a single [`Walker`](crate::Walker)
//! pass, so entries are in document order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    ast::{HeaderKind, NodeId, NodeKind, Span, WalkEvent},
    document::Document,
};

/// Running count of structural headers. Forced headers are never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeaderCounter {
    pub acts: usize,
    pub scenes: usize,
    pub pages: usize,
    pub frames: usize,
}

impl HeaderCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every header in `doc`.
    pub fn from_document(doc: &Document) -> Self {
        let mut counter = Self::new();
        for event in doc.walker() {
            if let WalkEvent::Enter(id) = event
                && let NodeKind::Header(header) = doc.node(id).kind
            {
                counter.count(header.kind);
            }
        }
        counter
    }

    /// Records one header and returns its 1-based ordinal among headers of
    /// the same kind, or `None` for a forced header.
    pub fn count(&mut self, kind: HeaderKind) -> Option<usize> {
        let slot = self.slot(kind)?;
        *slot += 1;
        Some(*slot)
    }

    pub fn get(&self, kind: HeaderKind) -> usize {
        match kind {
            HeaderKind::Act => self.acts,
            HeaderKind::Scene => self.scenes,
            HeaderKind::Page => self.pages,
            HeaderKind::Frame => self.frames,
            HeaderKind::Forced => 0,
        }
    }

    pub fn total(&self) -> usize {
        self.acts + self.scenes + self.pages + self.frames
    }

    fn slot(&mut self, kind: HeaderKind) -> Option<&mut usize> {
        match kind {
            HeaderKind::Act => Some(&mut self.acts),
            HeaderKind::Scene => Some(&mut self.scenes),
            HeaderKind::Page => Some(&mut self.pages),
            HeaderKind::Frame => Some(&mut self.frames),
            HeaderKind::Forced => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "entry", rename_all = "snake_case")]
pub enum OutlineEntry {
    Header {
        kind: HeaderKind,
        /// Position among headers of the same kind; absent for forced headers.
        ordinal: Option<usize>,
        keyword: String,
        identifier: Option<String>,
        title: Option<String>,
        span: Span,
    },
    Reference {
        /// Text between the brackets, markup included.
        text: String,
        span: Span,
    },
}

/// Headers and references of a document in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableOfContents {
    entries: Vec<OutlineEntry>,
    counter: HeaderCounter,
}

impl TableOfContents {
    pub fn build(doc: &Document) -> Self {
        let mut toc = Self::default();
        for event in doc.walker() {
            let WalkEvent::Enter(id) = event else {
                continue;
            };
            let node = doc.node(id);
            match node.kind {
                NodeKind::Header(header) => {
                    let ordinal = toc.counter.count(header.kind);
                    toc.entries.push(OutlineEntry::Header {
                        kind: header.kind,
                        ordinal,
                        keyword: doc.text(header.keyword).to_string(),
                        identifier: text_of(doc, header.identifier),
                        title: text_of(doc, header.title),
                        span: node.span,
                    });
                }
                NodeKind::Reference => {
                    let inner = bracket_contents(node.span);
                    let text = doc.source().get(inner.start..inner.end).unwrap_or_default();
                    toc.entries.push(OutlineEntry::Reference {
                        text: text.to_string(),
                        span: node.span,
                    });
                }
                _ => {}
            }
        }
        toc
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn counter(&self) -> HeaderCounter {
        self.counter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &OutlineEntry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, OutlineEntry::Header { .. }))
    }

    pub fn references(&self) -> impl Iterator<Item = &OutlineEntry> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, OutlineEntry::Reference { .. }))
    }

    /// Plain-text outline. Scenes and frames nest one level below acts and
    /// pages; references nest below the header they follow.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut level = 0;
        for entry in &self.entries {
            match entry {
                OutlineEntry::Header {
                    kind,
                    keyword,
                    identifier,
                    title,
                    ..
                } => {
                    level = header_level(*kind);
                    push_indent(&mut out, level);
                    if *kind == HeaderKind::Forced {
                        out.push('.');
                    }
                    out.push_str(keyword);
                    if let Some(identifier) = identifier {
                        out.push(' ');
                        out.push_str(identifier);
                    }
                    if let Some(title) = title {
                        out.push_str(" - ");
                        out.push_str(title);
                    }
                }
                OutlineEntry::Reference { text, .. } => {
                    push_indent(&mut out, level + 1);
                    out.push('[');
                    out.push_str(text);
                    out.push(']');
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Maps each speaker name to the start offset of every cue naming them.
pub fn named_entities(doc: &Document) -> BTreeMap<String, Vec<usize>> {
    let mut names: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for event in doc.walker() {
        if let WalkEvent::Enter(id) = event
            && let NodeKind::Cue(cue) = doc.node(id).kind
        {
            names
                .entry(doc.text(cue.name).to_string())
                .or_default()
                .push(doc.node(id).span.start);
        }
    }
    names
}

fn text_of(doc: &Document, id: Option<NodeId>) -> Option<String> {
    id.map(|id| doc.text(id).to_string())
}

fn bracket_contents(span: Span) -> Span {
    if span.len() >= 2 {
        Span::new(span.start + 1, span.end - 1)
    } else {
        Span::new(span.end, span.end)
    }
}

fn header_level(kind: HeaderKind) -> usize {
    match kind {
        HeaderKind::Scene | HeaderKind::Frame => 1,
        HeaderKind::Act | HeaderKind::Page | HeaderKind::Forced => 0,
    }
}

fn push_indent(out: &mut String, level: usize) {
    for _ in 0..level {
        out.push_str("  ");
    }
}
