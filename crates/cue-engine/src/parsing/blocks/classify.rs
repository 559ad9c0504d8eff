use crate::{
    ast::{NodeArena, NodeId},
    error::ArenaError,
    parsing::scanner::Scanner,
};

use super::kinds::{Cue, Description, EndMarker, Facsimile, Header, Lyric, ThematicBreak};

/// Recognizes exactly one block construct per trimmed line.
///
/// Classifiers run in a fixed priority order and the first match wins;
/// [`Description`] catches whatever is left. The returned block is detached:
/// placing it is the container resolver's job.
#[derive(Debug, Clone, Copy)]
pub struct BlockClassifier {
    pub cue_name_bound: usize,
}

impl BlockClassifier {
    pub fn new(cue_name_bound: usize) -> Self {
        Self { cue_name_bound }
    }

    /// Classifies the scanner's current line, which must not be blank.
    pub fn classify(
        &self,
        s: &mut Scanner<'_>,
        arena: &mut NodeArena,
    ) -> Result<NodeId, ArenaError> {
        type Scan = fn(&mut Scanner<'_>, &mut NodeArena) -> Result<Option<NodeId>, ArenaError>;
        const ORDER: [Scan; 6] = [
            ThematicBreak::scan,
            Header::scan_forced,
            Header::scan_structural,
            EndMarker::scan,
            Facsimile::scan,
            Lyric::scan,
        ];

        for scan in ORDER {
            s.set_loc(s.wc());
            if let Some(block) = scan(s, arena)? {
                return Ok(block);
            }
        }

        s.set_loc(s.wc());
        if let Some(block) = Cue::scan(s, arena, self.cue_name_bound)? {
            return Ok(block);
        }

        s.set_loc(s.wc());
        Description::build(s, arena)
    }
}

impl Default for BlockClassifier {
    fn default() -> Self {
        Self::new(Cue::DEFAULT_NAME_BOUND)
    }
}
