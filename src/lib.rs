//! JaBeJa: decentralized balanced graph partitioning by local search.
//!
//! Simulates the JaBeJa algorithm on a single shared in-memory graph: every
//! round, each node samples candidate partners, scores a hypothetical color
//! swap with the pair-benefit utility, and the accepted best candidate
//! trades colors with it. Because the only mutation is a pairwise swap, the
//! color classes stay balanced while the edge cut shrinks.
//!
//! Components:
//!
//! - **[`graph`]**: the node/color substrate and the derived metrics
//!   (edge cut, migrations).
//! - **[`sampling`]**: uniform and neighbor-local candidate sampling,
//!   without replacement.
//! - **[`utility`]**: the alpha-shaped pair-benefit function.
//! - **[`selector`]**: selection policy (RANDOM / LOCAL / HYBRID) and the
//!   greedy or simulated-annealing acceptance rule.
//! - **[`annealing`]**: temperature cool-down and periodic restart.
//! - **[`runner`]**: the round driver tying it all together.
//!
//! Graph loading, initial color assignment, CLI parsing, and result
//! persistence are left to the caller; the engine performs no I/O.
//!
//! # Examples
//!
//! ```
//! use jabeja::{Graph, JabejaConfig, JabejaRunner, SelectionPolicy};
//!
//! // Ring of four nodes split into two color blocks.
//! let mut graph = Graph::from_nodes([
//!     (0, 0, vec![1, 3]),
//!     (1, 0, vec![0, 2]),
//!     (2, 1, vec![1, 3]),
//!     (3, 1, vec![2, 0]),
//! ])
//! .unwrap();
//!
//! let config = JabejaConfig::default()
//!     .with_rounds(10)
//!     .with_policy(SelectionPolicy::Hybrid)
//!     .with_seed(42);
//!
//! let result = JabejaRunner::run(&mut graph, &config).unwrap();
//! assert_eq!(result.history.len(), 10);
//! assert!(result.final_metrics.edge_cut <= graph.total_edges());
//! ```
//!
//! # References
//!
//! - Rahimian, Payberah, Girdzijauskas, Jelasity & Haridi (2013),
//!   "JA-BE-JA: A Distributed Algorithm for Balanced Graph Partitioning"

pub mod annealing;
pub mod config;
pub mod graph;
pub mod runner;
pub mod sampling;
pub mod selector;
pub mod types;
pub mod utility;

pub use config::{Acceptance, JabejaConfig, SelectionPolicy};
pub use graph::{Color, Graph, Node, NodeId};
pub use runner::{JabejaResult, JabejaRunner};
pub use types::{DiscardReporter, RoundMetrics, RoundReporter};
