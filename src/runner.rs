//! Round driver: sweeps every node once per round, cools the temperature,
//! and emits derived metrics.
//!
//! Execution is single-threaded and sequential; all mutation flows through
//! the swap inside the sweep. A seeded configuration replays the identical
//! run: the RNG is consumed in a fixed order (neighbor sample, uniform
//! fallback, acceptance draws, per node, in graph iteration order).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::annealing::{Temperature, RESTART_INTERVAL};
use crate::config::JabejaConfig;
use crate::graph::{Graph, NodeId};
use crate::selector;
use crate::types::{DiscardReporter, RoundMetrics, RoundReporter};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JabejaResult {
    /// Metrics after the last round; `round` equals the configured round
    /// count.
    pub final_metrics: RoundMetrics,

    /// Temperature when the run finished.
    pub final_temperature: f64,

    /// One metrics record per round, in order.
    pub history: Vec<RoundMetrics>,
}

/// Mutable per-run state, threaded explicitly through each round step.
struct RunState {
    round: usize,
    swaps: usize,
    temperature: Temperature,
}

/// Executes the JaBeJa sample-and-swap algorithm.
pub struct JabejaRunner;

impl JabejaRunner {
    /// Runs the configured number of rounds over `graph`, mutating its
    /// colors in place.
    pub fn run(graph: &mut Graph, config: &JabejaConfig) -> Result<JabejaResult, String> {
        Self::run_with_reporter(graph, config, &mut DiscardReporter)
    }

    /// Runs with a reporting sink: `save` per round, `display` once at the
    /// end. The engine itself performs no I/O.
    pub fn run_with_reporter<Rep: RoundReporter>(
        graph: &mut Graph,
        config: &JabejaConfig,
        reporter: &mut Rep,
    ) -> Result<JabejaResult, String> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut state = RunState {
            round: 0,
            swaps: 0,
            temperature: Temperature::new(config.temperature, config.delta),
        };
        let mut history = Vec::with_capacity(config.rounds);
        let ids: Vec<NodeId> = graph.node_ids().to_vec();

        for round in 0..config.rounds {
            state.round = round;

            // Periodic restart: rounds divisible by the interval start back
            // at the initial temperature (a no-op for round 0).
            if round % RESTART_INTERVAL == 0 {
                state.temperature.restart();
            }

            for &id in &ids {
                sample_and_swap(graph, id, config, &mut state, &mut rng);
            }

            state.temperature.cool_down();

            let metrics = round_metrics(graph, round, state.swaps);
            reporter.save(&metrics);
            history.push(metrics);
        }

        let final_metrics = round_metrics(graph, config.rounds, state.swaps);
        reporter.display(&final_metrics);

        Ok(JabejaResult {
            final_metrics,
            final_temperature: state.temperature.value(),
            history,
        })
    }
}

/// One sample-and-swap attempt at `node`: select a partner under the
/// configured policy, then exchange colors and count the swap.
fn sample_and_swap<R: Rng>(
    graph: &mut Graph,
    node: NodeId,
    config: &JabejaConfig,
    state: &mut RunState,
    rng: &mut R,
) {
    let partner = selector::select_partner(graph, node, config, state.temperature.value(), rng);
    if let Some(q) = partner {
        graph.swap_colors(node, q);
        state.swaps += 1;
    }
}

/// Full-scan snapshot of the derived metrics. Edge cut and migrations are
/// recomputed from scratch every round, never incrementally maintained.
fn round_metrics(graph: &Graph, round: usize, swaps: usize) -> RoundMetrics {
    RoundMetrics {
        round,
        edge_cut: graph.edge_cut(),
        swaps,
        migrations: graph.migrations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectionPolicy;
    use crate::graph::Color;

    /// Ring of `n` nodes; first half one color, second half the other.
    fn two_block_ring(n: u32) -> Graph {
        Graph::from_nodes((0..n).map(|id| {
            let prev = (id + n - 1) % n;
            let next = (id + 1) % n;
            let color = if id < n / 2 { 0 } else { 1 };
            (id, color, vec![prev, next])
        }))
        .unwrap()
    }

    fn colors_sorted(graph: &Graph) -> Vec<Color> {
        let mut colors: Vec<Color> = graph.node_ids().iter().map(|&id| graph.color(id)).collect();
        colors.sort_unstable();
        colors
    }

    #[test]
    fn test_invalid_config_rejected_before_running() {
        let mut graph = two_block_ring(4);
        let config = JabejaConfig::default().with_rounds(0);
        assert!(JabejaRunner::run(&mut graph, &config).is_err());
        assert_eq!(graph.migrations(), 0, "graph untouched on rejection");
    }

    #[test]
    fn test_run_preserves_color_multiset_and_edge_cut_bound() {
        let mut graph = two_block_ring(20);
        let before = colors_sorted(&graph);
        let total_edges = graph.total_edges();

        let config = JabejaConfig::default()
            .with_rounds(30)
            .with_policy(SelectionPolicy::Random)
            .with_alpha(1.0)
            .with_temperature(2.0)
            .with_delta(0.9)
            .with_seed(42);
        let result = JabejaRunner::run(&mut graph, &config).unwrap();

        assert_eq!(colors_sorted(&graph), before);
        assert_eq!(result.history.len(), 30);
        for metrics in &result.history {
            assert!(metrics.edge_cut <= total_edges);
        }
        assert_eq!(result.final_metrics.round, 30);
        assert_eq!(result.final_metrics.edge_cut, graph.edge_cut());
    }

    #[test]
    fn test_swap_counter_is_cumulative() {
        let mut graph = two_block_ring(20);
        let config = JabejaConfig::default()
            .with_rounds(30)
            .with_alpha(1.0)
            .with_seed(42);
        let result = JabejaRunner::run(&mut graph, &config).unwrap();

        for window in result.history.windows(2) {
            assert!(
                window[1].swaps >= window[0].swaps,
                "cumulative swap counter must never decrease"
            );
        }
        assert_eq!(
            result.final_metrics.swaps,
            result.history.last().unwrap().swaps
        );
    }

    #[test]
    fn test_uniform_coloring_never_swaps() {
        // All nodes share one color: no differing-color pair ever exists,
        // so every round reports zero cut, zero swaps, zero migrations.
        let mut graph = Graph::from_nodes((0..8).map(|id| {
            let prev = (id + 7) % 8;
            let next = (id + 1) % 8;
            (id, 0, vec![prev, next])
        }))
        .unwrap();

        for policy in [
            SelectionPolicy::Random,
            SelectionPolicy::Local,
            SelectionPolicy::Hybrid,
        ] {
            let config = JabejaConfig::default()
                .with_rounds(10)
                .with_policy(policy)
                .with_seed(42);
            let result = JabejaRunner::run(&mut graph, &config).unwrap();

            for metrics in &result.history {
                assert_eq!(metrics.edge_cut, 0);
                assert_eq!(metrics.swaps, 0);
                assert_eq!(metrics.migrations, 0);
            }
        }
    }

    #[test]
    fn test_periodic_restart_resets_temperature() {
        // 301 rounds with delta 0.5 and T0 = 1.0: rounds 1..299 decay T to
        // the floor, round 300 starts back at exactly 1.0 and cools once,
        // so the run finishes at 0.5 rather than the floor.
        let mut graph = Graph::from_nodes([(0, 0, vec![1]), (1, 0, vec![0])]).unwrap();
        let config = JabejaConfig::default()
            .with_rounds(301)
            .with_temperature(1.0)
            .with_delta(0.5)
            .with_seed(42);
        let result = JabejaRunner::run(&mut graph, &config).unwrap();

        assert_eq!(result.final_temperature, 0.5);
        assert_eq!(result.history.len(), 301);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = JabejaConfig::default()
            .with_rounds(20)
            .with_policy(SelectionPolicy::Hybrid)
            .with_alpha(1.0)
            .with_seed(7);

        let mut graph_a = two_block_ring(16);
        let mut graph_b = two_block_ring(16);
        let result_a = JabejaRunner::run(&mut graph_a, &config).unwrap();
        let result_b = JabejaRunner::run(&mut graph_b, &config).unwrap();

        assert_eq!(result_a.history, result_b.history);
        assert_eq!(result_a.final_metrics, result_b.final_metrics);
    }

    #[test]
    fn test_reporter_receives_every_round_and_final_record() {
        #[derive(Default)]
        struct Recording {
            saved: Vec<RoundMetrics>,
            displayed: Vec<RoundMetrics>,
        }

        impl RoundReporter for Recording {
            fn save(&mut self, metrics: &RoundMetrics) {
                self.saved.push(*metrics);
            }
            fn display(&mut self, metrics: &RoundMetrics) {
                self.displayed.push(*metrics);
            }
        }

        let mut graph = two_block_ring(8);
        let config = JabejaConfig::default()
            .with_rounds(5)
            .with_alpha(1.0)
            .with_seed(42);
        let mut reporter = Recording::default();
        let result =
            JabejaRunner::run_with_reporter(&mut graph, &config, &mut reporter).unwrap();

        assert_eq!(reporter.saved.len(), 5);
        assert_eq!(reporter.saved, result.history);
        assert_eq!(reporter.displayed, vec![result.final_metrics]);
        let rounds: Vec<usize> = reporter.saved.iter().map(|m| m.round).collect();
        assert_eq!(rounds, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.final_metrics.round, 5);
    }

    #[test]
    fn test_simulated_annealing_run_smoke() {
        let mut graph = two_block_ring(20);
        let before = colors_sorted(&graph);

        let config = JabejaConfig::default()
            .with_rounds(30)
            .with_policy(SelectionPolicy::Hybrid)
            .with_alpha(1.0)
            .with_simulated_annealing(0.9)
            .with_seed(42);
        let result = JabejaRunner::run(&mut graph, &config).unwrap();

        assert_eq!(colors_sorted(&graph), before);
        assert_eq!(result.history.len(), 30);
    }
}
