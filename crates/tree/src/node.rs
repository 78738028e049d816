//! Index-based node arena for the branch graph.
//!
//! Nodes are owned by a single `Vec`; parent/child relations are plain
//! indices, so the tree-with-back-references shape needs no reference
//! counting and cannot form ownership cycles.

use glam::DVec2;

/// Identifier for a node in a [`Tree`].
///
/// An index into `Tree::nodes`, only meaningful within the lifetime of the
/// `Tree` it came from.
pub type NodeId = usize;

/// One node of the branch graph.
#[derive(Debug, Clone)]
pub struct Node {
    /// Canvas position (y grows downward).
    pub pos: DVec2,
    /// Steps from the root along the creation path. Drives branching
    /// probabilities and render thickness.
    pub depth: u32,
    /// Non-owning back-reference; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Continuation of this node's main chain, if one was grown.
    pub main_child: Option<NodeId>,
    /// Side children in creation order.
    pub children: Vec<NodeId>,
    /// True when this node is its parent's main-chain continuation.
    pub is_main_child: bool,
}

/// Arena-backed branch graph rooted at the trunk base.
#[derive(Debug, Clone)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

/// Id of the root node; the arena always stores the root first.
pub const ROOT: NodeId = 0;

impl Tree {
    /// Creates a tree containing only the root node at `pos`.
    pub fn with_root(pos: DVec2) -> Self {
        Self {
            nodes: vec![Node {
                pos,
                depth: 0,
                parent: None,
                main_child: None,
                children: Vec::new(),
                is_main_child: false,
            }],
        }
    }

    /// Attaches a main-chain continuation to `parent`.
    pub fn attach_main(&mut self, parent: NodeId, pos: DVec2) -> NodeId {
        let id = self.push_child(parent, pos, true);
        self.nodes[parent].main_child = Some(id);
        id
    }

    /// Attaches a side branch to `parent`.
    pub fn attach_side(&mut self, parent: NodeId, pos: DVec2) -> NodeId {
        let id = self.push_child(parent, pos, false);
        self.nodes[parent].children.push(id);
        id
    }

    fn push_child(&mut self, parent: NodeId, pos: DVec2, is_main_child: bool) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            pos,
            depth: self.nodes[parent].depth + 1,
            parent: Some(parent),
            main_child: None,
            children: Vec::new(),
            is_main_child,
        });
        id
    }

    /// Borrows the node with the given id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when the arena holds no nodes (never the case after `with_root`).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Direction this node was grown in, as degrees from +x with -90 = up:
    /// the heading from its parent's position to its own. The root has no
    /// parent and reports 0.
    pub fn heading_deg(&self, id: NodeId) -> f64 {
        let node = &self.nodes[id];
        match node.parent {
            Some(parent) => {
                let d = node.pos - self.nodes[parent].pos;
                d.y.atan2(d.x).to_degrees()
            }
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_creates_single_depth_zero_node() {
        let tree = Tree::with_root(DVec2::new(256.0, 502.0));
        assert_eq!(tree.len(), 1);
        let root = tree.node(ROOT);
        assert_eq!(root.depth, 0);
        assert!(root.parent.is_none());
        assert!(!root.is_main_child);
    }

    #[test]
    fn attach_main_links_both_directions() {
        let mut tree = Tree::with_root(DVec2::ZERO);
        let child = tree.attach_main(ROOT, DVec2::new(0.0, -20.0));
        assert_eq!(tree.node(ROOT).main_child, Some(child));
        assert_eq!(tree.node(child).parent, Some(ROOT));
        assert!(tree.node(child).is_main_child);
        assert_eq!(tree.node(child).depth, 1);
    }

    #[test]
    fn attach_side_appends_in_creation_order() {
        let mut tree = Tree::with_root(DVec2::ZERO);
        let a = tree.attach_side(ROOT, DVec2::new(-50.0, -10.0));
        let b = tree.attach_side(ROOT, DVec2::new(50.0, -10.0));
        assert_eq!(tree.node(ROOT).children, vec![a, b]);
        assert!(!tree.node(a).is_main_child);
        assert!(tree.node(ROOT).main_child.is_none());
    }

    #[test]
    fn heading_is_parent_to_node_direction() {
        let mut tree = Tree::with_root(DVec2::ZERO);
        // Straight up on a y-down canvas.
        let up = tree.attach_main(ROOT, DVec2::new(0.0, -20.0));
        assert!((tree.heading_deg(up) - (-90.0)).abs() < 1e-12);
        // Straight along +x.
        let right = tree.attach_side(ROOT, DVec2::new(50.0, 0.0));
        assert!(tree.heading_deg(right).abs() < 1e-12);
    }

    #[test]
    fn root_heading_is_zero() {
        let tree = Tree::with_root(DVec2::new(10.0, 10.0));
        assert_eq!(tree.heading_deg(ROOT), 0.0);
    }

    #[test]
    fn depth_accumulates_along_chain() {
        let mut tree = Tree::with_root(DVec2::ZERO);
        let a = tree.attach_main(ROOT, DVec2::new(0.0, -20.0));
        let b = tree.attach_main(a, DVec2::new(0.0, -40.0));
        let side = tree.attach_side(b, DVec2::new(30.0, -60.0));
        assert_eq!(tree.node(b).depth, 2);
        assert_eq!(tree.node(side).depth, 3);
    }
}
