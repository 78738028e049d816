#![deny(unsafe_code)]
//! Branch-graph growth engine and segment extractor.
//!
//! [`grow`] runs the seeded recursive growth to completion and hands back a
//! [`TreeContext`] holding the node arena and the extracted [`Segment`]
//! polylines, ready for curve fitting and rasterization.

pub mod growth;
pub mod node;
pub mod segment;

pub use growth::{grow, grow_observed, GrowthParams, TreeContext, MAX_GROWTH_DEPTH};
pub use node::{Node, NodeId, Tree, ROOT};
pub use segment::{extract_segment, Segment, LINK_EPSILON};
