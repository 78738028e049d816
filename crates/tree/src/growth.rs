//! Stochastic recursive growth of the branch graph.
//!
//! Growth is driven entirely by one seeded float stream: at each node a draw
//! decides whether the main chain continues, a second draw picks the new
//! heading, and up to three independent trials spawn side branches the same
//! way. When the main chain fails to continue, the chain is terminated and
//! its segment extracted on the spot. Recursion visits the main child first,
//! then side children in creation order.

use crate::node::{Node, NodeId, Tree, ROOT};
use crate::segment::{extract_segment, Segment};
use glam::DVec2;
use sapling_core::params::{param_f64, param_usize};
use sapling_core::{SaplingError, Xorshift64};
use serde_json::Value;

/// Hard recursion ceiling. The probability tables already guarantee no node
/// deeper than 13; this bound holds even if those tables are edited.
pub const MAX_GROWTH_DEPTH: u32 = 32;

/// Default distance grown per main-chain step.
const DEFAULT_MAIN_STEP: f64 = 20.0;
/// Default distance a side branch jumps from its parent.
const DEFAULT_SIDE_STEP: f64 = 50.0;
/// Default half-width of the main-chain heading spread, degrees.
const DEFAULT_MAIN_VARIANCE: f64 = 30.0;
/// Default half-width of the side-branch heading spread, degrees.
const DEFAULT_SIDE_VARIANCE: f64 = 90.0;
/// Default number of independent side-branch trials per node.
const DEFAULT_SIDE_TRIALS: usize = 3;

/// "Up" on a y-down canvas, degrees from +x.
const UP_DEG: f64 = -90.0;

/// Main chain always continues below this depth.
const MAIN_SURE_BELOW: u32 = 7;
/// Last depth at which the main chain may continue.
const MAIN_LAST: u32 = 10;
/// Continuation probability in the decay band [MAIN_SURE_BELOW, MAIN_LAST].
const MAIN_DECAY_PROB: f64 = 0.9;
/// Side branches only spawn inside [SIDE_FIRST, SIDE_LAST].
const SIDE_FIRST: u32 = 5;
const SIDE_LAST: u32 = 12;
/// Per-trial side-branch probability inside the band.
const SIDE_PROB: f64 = 0.1;

/// Tunable growth parameters; probability bands are fixed.
#[derive(Debug, Clone, Copy)]
pub struct GrowthParams {
    /// Distance grown per main-chain step.
    pub main_step: f64,
    /// Distance a side branch jumps from its parent.
    pub side_step: f64,
    /// Half-width of the main-chain heading spread around up, degrees.
    pub main_variance_deg: f64,
    /// Half-width of the side-branch heading spread around up, degrees.
    pub side_variance_deg: f64,
    /// Independent side-branch trials per node.
    pub side_trials: usize,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            main_step: DEFAULT_MAIN_STEP,
            side_step: DEFAULT_SIDE_STEP,
            main_variance_deg: DEFAULT_MAIN_VARIANCE,
            side_variance_deg: DEFAULT_SIDE_VARIANCE,
            side_trials: DEFAULT_SIDE_TRIALS,
        }
    }
}

impl GrowthParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            main_step: param_f64(params, "main_step", DEFAULT_MAIN_STEP),
            side_step: param_f64(params, "side_step", DEFAULT_SIDE_STEP),
            main_variance_deg: param_f64(params, "main_variance_deg", DEFAULT_MAIN_VARIANCE),
            side_variance_deg: param_f64(params, "side_variance_deg", DEFAULT_SIDE_VARIANCE),
            side_trials: param_usize(params, "side_trials", DEFAULT_SIDE_TRIALS),
        }
    }
}

/// Probability that a node at `depth` grows a main-chain continuation.
pub fn main_branch_prob(depth: u32) -> f64 {
    if depth < MAIN_SURE_BELOW {
        1.0
    } else if depth <= MAIN_LAST {
        MAIN_DECAY_PROB
    } else {
        0.0
    }
}

/// Per-trial probability that a node at `depth` spawns a side branch.
pub fn side_branch_prob(depth: u32) -> f64 {
    if (SIDE_FIRST..=SIDE_LAST).contains(&depth) {
        SIDE_PROB
    } else {
        0.0
    }
}

/// Everything one generation accumulates: the arena, the extracted segments,
/// and any extraction failures (each of which aborted only its own segment).
///
/// A new seed builds a fresh context; nothing carries over.
#[derive(Debug)]
pub struct TreeContext {
    pub tree: Tree,
    pub segments: Vec<Segment>,
    pub failures: Vec<SaplingError>,
}

/// Grows a full tree from `seed` with the root pinned at `root`.
pub fn grow(seed: &str, root: DVec2, params: &GrowthParams) -> TreeContext {
    grow_observed(seed, root, params, |_, _| {})
}

/// Like [`grow`], invoking `observer` once per created node (root included).
/// The observer exists for debug overlays such as node markers; it cannot
/// influence growth.
pub fn grow_observed(
    seed: &str,
    root: DVec2,
    params: &GrowthParams,
    mut observer: impl FnMut(NodeId, &Node),
) -> TreeContext {
    let mut rng = Xorshift64::from_str_seed(seed);
    let mut ctx = TreeContext {
        tree: Tree::with_root(root),
        segments: Vec::new(),
        failures: Vec::new(),
    };
    observer(ROOT, ctx.tree.node(ROOT));
    grow_node(&mut ctx, &mut rng, params, ROOT, &mut observer);
    ctx
}

fn step_from(pos: DVec2, distance: f64, angle_deg: f64) -> DVec2 {
    let rad = angle_deg.to_radians();
    pos + distance * DVec2::new(rad.cos(), rad.sin())
}

fn terminate_chain(ctx: &mut TreeContext, node: NodeId) {
    match extract_segment(&ctx.tree, node, &ctx.segments) {
        Ok(segment) => ctx.segments.push(segment),
        Err(err) => ctx.failures.push(err),
    }
}

fn grow_node(
    ctx: &mut TreeContext,
    rng: &mut Xorshift64,
    params: &GrowthParams,
    id: NodeId,
    observer: &mut impl FnMut(NodeId, &Node),
) {
    let depth = ctx.tree.node(id).depth;
    if depth >= MAX_GROWTH_DEPTH {
        terminate_chain(ctx, id);
        return;
    }

    // Both the main continuation and every side branch steer relative to the
    // direction this node was grown in.
    let heading = ctx.tree.heading_deg(id);
    let pos = ctx.tree.node(id).pos;

    if rng.next_f64() < main_branch_prob(depth) {
        let angle = heading
            + rng.next_range(
                UP_DEG - params.main_variance_deg,
                UP_DEG + params.main_variance_deg,
            );
        let child = ctx
            .tree
            .attach_main(id, step_from(pos, params.main_step, angle));
        observer(child, ctx.tree.node(child));
    } else {
        terminate_chain(ctx, id);
    }

    for _ in 0..params.side_trials {
        if rng.next_f64() < side_branch_prob(depth) {
            let angle = heading
                + rng.next_range(
                    UP_DEG - params.side_variance_deg,
                    UP_DEG + params.side_variance_deg,
                );
            let child = ctx
                .tree
                .attach_side(id, step_from(pos, params.side_step, angle));
            observer(child, ctx.tree.node(child));
        }
    }

    if let Some(main) = ctx.tree.node(id).main_child {
        grow_node(ctx, rng, params, main, observer);
    }
    for i in 0.. {
        let Some(&child) = ctx.tree.node(id).children.get(i) else {
            break;
        };
        grow_node(ctx, rng, params, child, observer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grow_default(seed: &str) -> TreeContext {
        grow(seed, DVec2::new(256.0, 502.0), &GrowthParams::default())
    }

    #[test]
    fn probability_bands_match_depth() {
        assert_eq!(main_branch_prob(0), 1.0);
        assert_eq!(main_branch_prob(6), 1.0);
        assert_eq!(main_branch_prob(7), 0.9);
        assert_eq!(main_branch_prob(10), 0.9);
        assert_eq!(main_branch_prob(11), 0.0);
        assert_eq!(side_branch_prob(4), 0.0);
        assert_eq!(side_branch_prob(5), 0.1);
        assert_eq!(side_branch_prob(12), 0.1);
        assert_eq!(side_branch_prob(13), 0.0);
    }

    #[test]
    fn same_seed_grows_bit_identical_trees() {
        let a = grow_default("AAAAAAAAA");
        let b = grow_default("AAAAAAAAA");
        assert_eq!(a.tree.len(), b.tree.len());
        for (na, nb) in a.tree.nodes.iter().zip(b.tree.nodes.iter()) {
            assert_eq!(na.pos.x.to_bits(), nb.pos.x.to_bits());
            assert_eq!(na.pos.y.to_bits(), nb.pos.y.to_bits());
            assert_eq!(na.depth, nb.depth);
            assert_eq!(na.parent, nb.parent);
        }
        assert_eq!(a.segments.len(), b.segments.len());
        for (sa, sb) in a.segments.iter().zip(b.segments.iter()) {
            assert_eq!(sa.nodes, sb.nodes);
            assert_eq!(sa.parent, sb.parent);
        }
    }

    #[test]
    fn different_seeds_grow_different_trees() {
        let a = grow_default("oak");
        let b = grow_default("ash");
        let same = a.tree.len() == b.tree.len()
            && a.tree
                .nodes
                .iter()
                .zip(b.tree.nodes.iter())
                .all(|(na, nb)| na.pos == nb.pos);
        assert!(!same, "two seeds grew the same {} nodes", a.tree.len());
    }

    #[test]
    fn every_non_root_node_has_exactly_one_parent() {
        let ctx = grow_default("parent check");
        let mut child_count = vec![0usize; ctx.tree.len()];
        for (id, node) in ctx.tree.nodes.iter().enumerate() {
            match node.parent {
                Some(p) => {
                    assert!(p < id, "parent {p} created after child {id}");
                    child_count[id] += 1;
                }
                None => assert_eq!(id, ROOT),
            }
            if node.is_main_child {
                assert!(node.parent.is_some(), "main-chain node {id} is orphaned");
            }
        }
        assert!(child_count.iter().skip(1).all(|&c| c == 1));
    }

    #[test]
    fn growth_never_exceeds_depth_13() {
        for seed in ["AAAAAAAAA", "oak", "ash", "willow", "x", ""] {
            let ctx = grow_default(seed);
            let max = ctx.tree.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
            assert!(max <= 13, "seed {seed:?} reached depth {max}");
        }
    }

    #[test]
    fn trunk_is_at_least_seven_nodes_tall() {
        // Continuation probability is 1.0 below depth 7, so the main chain
        // cannot terminate earlier.
        let ctx = grow_default("short?");
        let mut len = 0;
        let mut cur = ROOT;
        while let Some(next) = ctx.tree.node(cur).main_child {
            len += 1;
            cur = next;
        }
        assert!(len >= 7, "trunk terminated after {len} steps");
    }

    #[test]
    fn no_extraction_failures_under_correct_growth() {
        for seed in ["AAAAAAAAA", "oak", "ash"] {
            assert!(grow_default(seed).failures.is_empty());
        }
    }

    #[test]
    fn every_node_is_covered_by_a_segment() {
        let ctx = grow_default("coverage");
        let mut covered = HashSet::new();
        for seg in &ctx.segments {
            covered.extend(seg.nodes.iter().copied());
        }
        for id in 0..ctx.tree.len() {
            assert!(covered.contains(&id), "node {id} not in any segment");
        }
    }

    #[test]
    fn junction_nodes_appear_in_parent_and_child_segments() {
        let ctx = grow_default("junctions");
        for seg in &ctx.segments {
            let Some(parent_idx) = seg.parent else {
                continue;
            };
            let junction = seg.base();
            assert!(
                ctx.segments[parent_idx].nodes.contains(&junction),
                "junction {junction} missing from parent segment"
            );
        }
    }

    #[test]
    fn trunk_segment_is_extracted_first_and_has_no_parent() {
        let ctx = grow_default("trunk first");
        let trunk = &ctx.segments[0];
        assert!(trunk.parent.is_none());
        assert_eq!(trunk.base(), ROOT);
        // Every other segment chains to an earlier one.
        for seg in &ctx.segments[1..] {
            assert!(seg.parent.is_some());
        }
    }

    #[test]
    fn observer_sees_every_node_exactly_once() {
        let mut seen = Vec::new();
        let ctx = grow_observed(
            "observer",
            DVec2::new(256.0, 502.0),
            &GrowthParams::default(),
            |id, node| seen.push((id, node.depth)),
        );
        assert_eq!(seen.len(), ctx.tree.len());
        let ids: HashSet<_> = seen.iter().map(|&(id, _)| id).collect();
        assert_eq!(ids.len(), ctx.tree.len());
        assert_eq!(seen[0], (ROOT, 0));
    }

    #[test]
    fn params_from_json_overrides_and_defaults() {
        let v = serde_json::json!({"main_step": 10.0, "side_trials": 1});
        let p = GrowthParams::from_json(&v);
        assert_eq!(p.main_step, 10.0);
        assert_eq!(p.side_trials, 1);
        assert_eq!(p.side_step, 50.0);
        assert_eq!(p.side_variance_deg, 90.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn termination_and_invariants_for_arbitrary_seeds(seed in ".{0,24}") {
                let ctx = grow(&seed, DVec2::new(256.0, 502.0), &GrowthParams::default());
                let max_depth = ctx.tree.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
                prop_assert!(max_depth <= 13);
                prop_assert!(ctx.failures.is_empty());
                for node in &ctx.tree.nodes {
                    if node.is_main_child {
                        prop_assert!(node.parent.is_some());
                    }
                }
            }
        }
    }
}
