//! Candidate sampling: uniform over the whole graph, or neighbor-local.
//!
//! Both primitives sample without replacement and never return the
//! initiating node. They are pure with respect to the graph and consume the
//! shared run RNG, so a seeded run replays the exact same candidate sets.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::graph::{Graph, NodeId};

/// Draws up to `count` distinct node ids uniformly from the whole graph,
/// excluding `exclude`.
///
/// `count` is capped at the eligible population (`len - 1`), so the draw is
/// bounded by construction and cannot spin waiting for more distinct ids
/// than exist.
pub fn uniform_sample<R: Rng>(
    graph: &Graph,
    exclude: NodeId,
    count: usize,
    rng: &mut R,
) -> Vec<NodeId> {
    let eligible: Vec<NodeId> = graph
        .node_ids()
        .iter()
        .copied()
        .filter(|&id| id != exclude)
        .collect();
    let count = count.min(eligible.len());
    eligible.choose_multiple(rng, count).copied().collect()
}

/// Draws up to `count` distinct neighbors of `node`.
///
/// When the node has `count` or fewer neighbors, all of them are returned
/// (in adjacency order) without touching the RNG.
pub fn neighbor_sample<R: Rng>(
    graph: &Graph,
    node: NodeId,
    count: usize,
    rng: &mut R,
) -> Vec<NodeId> {
    let neighbors = graph.neighbors(node);
    if neighbors.len() <= count {
        neighbors.to_vec()
    } else {
        neighbors.choose_multiple(rng, count).copied().collect()
    }
}
