//! Partner selection: policy dispatch plus the acceptance rule.
//!
//! Each node gets one selection attempt per round. LOCAL and HYBRID both
//! try sampled neighbors first and fall back to a uniform sample when no
//! neighbor candidate is accepted — the reference algorithm's behavior,
//! kept deliberately (LOCAL is not strictly local).

use rand::Rng;

use crate::config::{Acceptance, JabejaConfig, SelectionPolicy};
use crate::graph::{Graph, NodeId};
use crate::sampling;
use crate::utility;

/// Picks at most one swap partner for `node` under the configured policy.
///
/// Does not mutate the graph; the caller executes the swap.
pub fn select_partner<R: Rng>(
    graph: &Graph,
    node: NodeId,
    config: &JabejaConfig,
    temperature: f64,
    rng: &mut R,
) -> Option<NodeId> {
    if matches!(
        config.policy,
        SelectionPolicy::Local | SelectionPolicy::Hybrid
    ) {
        let candidates = sampling::neighbor_sample(graph, node, config.neighbor_sample_size, rng);
        if let Some(partner) = find_partner(graph, node, &candidates, config, temperature, rng) {
            return Some(partner);
        }
    }

    let candidates = sampling::uniform_sample(graph, node, config.uniform_sample_size, rng);
    find_partner(graph, node, &candidates, config, temperature, rng)
}

/// Scans `candidates` and returns the accepted partner, tracking the
/// best-so-far benefit.
///
/// Same-color candidates are skipped outright; a same-color swap is a
/// no-op, never a scored option.
pub fn find_partner<R: Rng>(
    graph: &Graph,
    p: NodeId,
    candidates: &[NodeId],
    config: &JabejaConfig,
    temperature: f64,
    rng: &mut R,
) -> Option<NodeId> {
    let mut best_partner = None;
    let mut highest_benefit = 0.0;

    for &q in candidates {
        if graph.color(q) == graph.color(p) {
            continue;
        }

        let old_benefit = utility::benefit(graph, p, q, config.alpha);
        let new_benefit = utility::benefit_if_swapped(graph, p, q, config.alpha);

        let accept = match config.acceptance {
            Acceptance::Greedy => {
                new_benefit * temperature > old_benefit && new_benefit > highest_benefit
            }
            Acceptance::SimulatedAnnealing { factor } => {
                // The draw lives in [0, 1), so a probability above 1
                // (improving swap, large factor or small T) always accepts.
                let ap = factor * ((new_benefit - old_benefit) / temperature).exp();
                new_benefit != old_benefit && rng.random::<f64>() < ap
            }
        };

        if accept {
            best_partner = Some(q);
            highest_benefit = new_benefit;
        }
    }

    best_partner
}
