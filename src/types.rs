//! Metrics records and the reporting seam.

/// Partition quality snapshot after one round.
///
/// All fields are recomputed from the current graph state by a full scan;
/// `swaps` is the cumulative count since the start of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundMetrics {
    /// 0-based round number; the final record carries the configured round
    /// count.
    pub round: usize,
    /// Edges whose endpoints hold different colors.
    pub edge_cut: usize,
    /// Cumulative swaps across the whole run.
    pub swaps: usize,
    /// Nodes whose color differs from their initial assignment.
    pub migrations: usize,
}

/// Sink for run metrics. The engine itself performs no file or console I/O;
/// persistence and display belong to the caller.
///
/// `save` receives every round's record; `display` receives the single
/// final record after the last round. Both default to no-ops so a reporter
/// only implements the side it cares about.
pub trait RoundReporter {
    /// Called once per round with that round's metrics.
    fn save(&mut self, metrics: &RoundMetrics) {
        let _ = metrics;
    }

    /// Called once, after the last round, with the final metrics.
    fn display(&mut self, metrics: &RoundMetrics) {
        let _ = metrics;
    }
}

/// Reporter that drops everything. Used by runs that only consume the
/// returned result.
#[derive(Debug, Default)]
pub struct DiscardReporter;

impl RoundReporter for DiscardReporter {}
