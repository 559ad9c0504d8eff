use crate::{
    ast::{NodeArena, NodeId, NodeKind, Span},
    error::ArenaError,
    parsing::{ParseOptions, inline::InlineParser, scanner::Scanner},
};

use super::{
    classify::BlockClassifier,
    containers::{ContainerResolver, Placement},
    kinds::{Lyric, with_stream},
};

/// Builds the document tree one line at a time.
///
/// Each line is classified, placed by the [`ContainerResolver`], and then
/// finalized: its text-bearing nodes are handed to the inline parser. The
/// arena is committed after every line, so only the line in progress can
/// ever be rolled back.
pub struct BlockBuilder<'src> {
    src: &'src str,
    arena: NodeArena,
    root: NodeId,
    classifier: BlockClassifier,
    resolver: ContainerResolver,
    inlines: InlineParser,
}

impl<'src> BlockBuilder<'src> {
    pub fn new(src: &'src str, options: &ParseOptions) -> Result<Self, ArenaError> {
        let mut arena =
            NodeArena::with_capacity(options.initial_capacity).with_limit(options.max_nodes);
        let root = arena.alloc(NodeKind::Document, Span::new(0, src.len()))?;
        arena.commit();

        Ok(Self {
            src,
            arena,
            root,
            classifier: BlockClassifier::new(options.cue_name_bound),
            resolver: ContainerResolver::new(root),
            inlines: InlineParser::new(),
        })
    }

    /// Adds the scanner's current line, which must not be blank.
    pub fn push_line(&mut self, s: &mut Scanner<'_>) -> Result<(), ArenaError> {
        let mark = self.arena.mark();
        let block = self.classifier.classify(s, &mut self.arena)?;
        log::trace!(
            "line {}..{} classified as {}",
            s.bol(),
            s.eol(),
            self.arena[block].kind
        );

        let Placement { container, block } =
            self.resolver.resolve(&mut self.arena, s, block, mark)?;
        self.arena.append_child(container, block);
        self.finalize(block)?;

        self.arena.commit();
        Ok(())
    }

    pub fn finish(self) -> (NodeArena, NodeId) {
        (self.arena, self.root)
    }

    /// Runs inline parsing over the text-bearing nodes of an attached block.
    fn finalize(&mut self, block: NodeId) -> Result<(), ArenaError> {
        let kind = self.arena[block].kind;
        match kind {
            NodeKind::Description | NodeKind::Line => {
                let stream = self.arena[block].first_child();
                self.parse_inlines(stream, false)
            }
            NodeKind::Facsimile => {
                let stream = self.arena[block]
                    .first_child()
                    .and_then(|line| self.arena[line].first_child());
                self.parse_inlines(stream, false)
            }
            NodeKind::Header(header) => {
                let stream = header.title.and_then(|title| self.arena[title].first_child());
                self.parse_inlines(stream, false)
            }
            NodeKind::Cue(cue) => self.finalize_direction(cue.direction),
            _ => Ok(()),
        }
    }

    /// A direction that reads as a lyric line becomes a LyricDirection
    /// holding a Line; any other direction gets a Stream over its text.
    /// Parentheticals are recognized in both, but only on this first line:
    /// lyric continuation Lines are finalized like any other Line.
    fn finalize_direction(&mut self, direction: NodeId) -> Result<(), ArenaError> {
        let span = self.arena[direction].span;
        let mut s = Scanner::over(self.src, span);

        let stream = match Lyric::content_start(&mut s) {
            Some(start) => {
                self.arena[direction].kind = NodeKind::LyricDirection;
                let line =
                    with_stream(&mut self.arena, NodeKind::Line, Span::new(start, span.end))?;
                self.arena.append_child(direction, line);
                self.arena[line].first_child()
            }
            None => {
                let stream = self.arena.alloc(NodeKind::Stream, span)?;
                self.arena.append_child(direction, stream);
                Some(stream)
            }
        };
        self.parse_inlines(stream, true)
    }

    fn parse_inlines(&mut self, stream: Option<NodeId>, parens: bool) -> Result<(), ArenaError> {
        match stream {
            Some(stream) => self.inlines.parse(self.src, &mut self.arena, stream, parens),
            None => Ok(()),
        }
    }
}
