//! Segment extraction: turning terminated main chains into renderable
//! polylines.
//!
//! A segment is the maximal run of main-chain nodes ending at a tip, walked
//! back to the branch point it sprouted from (or the root). The branch
//! point's parent is included too, so a segment visually continues into the
//! chain it grew out of — that shared junction node belongs to both segments.

use crate::node::{NodeId, Tree};
use glam::DVec2;
use sapling_core::SaplingError;

/// Position tolerance when matching a segment's base against the nodes of
/// earlier segments. Both segments hold the very same arena node, so exact
/// equality is the expected case; the epsilon only guards positions that
/// took a lossy serialization round-trip.
pub const LINK_EPSILON: f64 = 1e-9;

/// Ordered polyline of node ids, tip first, base last.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Walk order: terminal tip down to (and including) the branch point and
    /// its parent.
    pub nodes: Vec<NodeId>,
    /// Index of the segment this one sprouted from, in extraction order.
    /// `None` for the trunk.
    pub parent: Option<usize>,
    /// Generation depth of the tip node; render thickness tapers on this.
    pub tip_depth: u32,
}

impl Segment {
    /// The terminal node this segment was extracted from.
    pub fn tip(&self) -> NodeId {
        self.nodes[0]
    }

    /// The segment's origin: branch point's parent, or the root.
    pub fn base(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Node positions in walk order (tip first).
    pub fn positions(&self, tree: &Tree) -> Vec<DVec2> {
        self.nodes.iter().map(|&id| tree.node(id).pos).collect()
    }

    /// Node positions reversed into base-to-tip order. This is the polyline
    /// handed to the curve fitters, so that progress along the fitted curve
    /// runs 0 at the base and 1 at the tip.
    pub fn curve_points(&self, tree: &Tree) -> Vec<DVec2> {
        self.nodes
            .iter()
            .rev()
            .map(|&id| tree.node(id).pos)
            .collect()
    }

    fn contains_position(&self, tree: &Tree, pos: DVec2, epsilon: f64) -> bool {
        self.nodes
            .iter()
            .any(|&id| tree.node(id).pos.distance(pos) <= epsilon)
    }
}

/// Walks upward from a terminal node and builds its segment, linking it to
/// the earlier segment that contains its base position.
///
/// The walk includes the terminal, every `is_main_child` ancestor, the first
/// non-main ancestor (the branch point), and that branch point's parent when
/// it has one. Fails with `SaplingError::OrphanMainChild` if a main-chain
/// node has no parent; the caller records the failure and skips only this
/// segment.
pub fn extract_segment(
    tree: &Tree,
    terminal: NodeId,
    existing: &[Segment],
) -> Result<Segment, SaplingError> {
    let mut nodes = Vec::new();
    let mut current = terminal;
    loop {
        let node = tree.node(current);
        nodes.push(current);
        if !node.is_main_child {
            if let Some(parent) = node.parent {
                nodes.push(parent);
            }
            break;
        }
        match node.parent {
            Some(parent) => current = parent,
            None => return Err(SaplingError::OrphanMainChild(current)),
        }
    }

    let base_pos = tree.node(nodes[nodes.len() - 1]).pos;
    let parent = existing
        .iter()
        .position(|seg| seg.contains_position(tree, base_pos, LINK_EPSILON));

    Ok(Segment {
        tip_depth: tree.node(terminal).depth,
        nodes,
        parent,
    })
}
