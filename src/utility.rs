//! Swap-benefit utility for node pairs (Eq. 5 of the JaBeJa paper).
//!
//! The utility of a pair is the alpha-shaped sum of each node's same-color
//! neighbor count. `alpha > 1` rewards concentrating agreement on one node
//! of the pair over spreading it evenly.

use crate::graph::{Graph, NodeId};

/// Current total local agreement of the pair:
/// `d_p(color(p))^alpha + d_q(color(q))^alpha`.
pub fn benefit(graph: &Graph, p: NodeId, q: NodeId, alpha: f64) -> f64 {
    let dpp = graph.degree(p, graph.color(p)) as f64;
    let dqq = graph.degree(q, graph.color(q)) as f64;
    dpp.powf(alpha) + dqq.powf(alpha)
}

/// Agreement the pair would have after exchanging colors:
/// `d_p(color(q))^alpha + d_q(color(p))^alpha`.
///
/// A zero same-color degree contributes `0^alpha = 0` for any positive
/// alpha; no special-casing needed.
pub fn benefit_if_swapped(graph: &Graph, p: NodeId, q: NodeId, alpha: f64) -> f64 {
    let dpq = graph.degree(p, graph.color(q)) as f64;
    let dqp = graph.degree(q, graph.color(p)) as f64;
    dpq.powf(alpha) + dqp.powf(alpha)
}
