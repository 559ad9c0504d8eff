//! # Block Parsing
//!
//! Line-at-a-time block construction.
//!
//! ## Parsing Phases
//!
//! 1. **Classification** (`classify`): the trimmed line is matched against each
//!    block kind in priority order, producing a detached candidate subtree
//! 2. **Resolution** (`containers`): the candidate is attached to the
//!    document, merged into an earlier block as a continuation, or rolled
//!    back and replaced by a Description
//! 3. **Finalize** (`builder`): text-bearing nodes of the placed block are
//!    handed to inline parsing
//!
//! ## Modules
//!
//! - **`kinds`**: one type per block construct with its delimiter constants
//! - **`classify`**: `BlockClassifier` priority dispatch
//! - **`containers`**: `ContainerResolver` attachment state machine
//! - **`builder`**: `BlockBuilder` driving the three phases per line
//!
//! ## Key Invariants
//!
//! - Every non-blank line yields exactly one block or continuation
//! - Document-level blocks span the raw line; their Streams span trimmed text
//! - Rollback never crosses a line boundary

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::BlockClassifier;
pub use containers::{ContainerResolver, Placement};
