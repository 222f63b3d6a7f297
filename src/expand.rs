//! Relation and upload expansion planning
//!
//! Re-exports `tessera-expand`: the fetch-time expansion planner and the
//! many-to-many relation detector.

pub use tessera_expand::*;
