//! # tessera-blocks
//!
//! Block tree model and renderer contract for the Tessera admin toolkit.
//!
//! - [`BlockNode`] / [`BlockContent`]: the ordered forest of typed blocks
//!   plus the side-table of per-node field values
//! - [`find_block_type`] / [`BlockContent::iter_depth_first`]: traversal
//!   helpers shared by the transform pipeline
//! - [`BlockRenderer`] / [`render_tree`]: the outward-facing rendering
//!   seam: depth-first, bottom-up, unknown types skipped gracefully

pub mod node;
pub mod render;

pub use node::{BlockContent, BlockNode, BlockTreeError, DepthFirstIter, find_block_type};
pub use render::{BlockRenderer, MAX_RENDER_DEPTH, RenderNode, RenderOptions, render_tree};
