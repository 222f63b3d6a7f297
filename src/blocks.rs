//! Block tree model and renderer contract
//!
//! Re-exports `tessera-blocks`: the [`BlockNode`]/[`BlockContent`] data
//! model, traversal helpers, and the [`BlockRenderer`] seam a rendering
//! layer implements.

pub use tessera_blocks::*;
