//! # Snapshot Testing Support
//!
//! Utilities for checking parser output.
//!
//! ## Modules
//!
//! - **`normalize`**: converts a parsed document to a stable, serializable
//!   `Snap` tree (also used for the CLI's JSON output)
//! - **`invariants`**: runtime checks for tree correctness (spans in bounds,
//!   parent containment, sibling order, link symmetry, walker balance)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
