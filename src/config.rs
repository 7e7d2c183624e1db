//! Run configuration: policies, acceptance modes, and parameter domains.

/// How a node picks its candidate partners each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionPolicy {
    /// Uniform sample over the whole graph.
    Random,
    /// Sampled neighbors first; falls back to a uniform sample when no
    /// neighbor candidate is accepted.
    Local,
    /// Sampled neighbors first, then a uniform sample — same fallback
    /// behavior as [`SelectionPolicy::Local`] in the reference algorithm.
    Hybrid,
}

/// Swap acceptance rule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Accept a candidate iff `benefit_if_swapped * T > benefit` and it
    /// beats the best benefit seen so far in this scan.
    Greedy,
    /// Metropolis-style acceptance with probability
    /// `factor * exp((benefit_if_swapped - benefit) / T)`, compared against
    /// a uniform [0, 1) draw. Probabilities above 1 accept unconditionally.
    SimulatedAnnealing {
        /// Scaling factor applied to the acceptance probability.
        factor: f64,
    },
}

/// Configuration for a JaBeJa run.
///
/// # Examples
///
/// ```
/// use jabeja::config::{Acceptance, JabejaConfig, SelectionPolicy};
///
/// let config = JabejaConfig::default()
///     .with_rounds(500)
///     .with_policy(SelectionPolicy::Hybrid)
///     .with_temperature(2.0)
///     .with_delta(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.acceptance, Acceptance::Greedy);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JabejaConfig {
    /// Number of rounds (full sweeps over all nodes). Must be positive.
    pub rounds: usize,

    /// Candidate partner selection policy.
    pub policy: SelectionPolicy,

    /// Initial temperature. Higher values accept more swaps early on.
    pub temperature: f64,

    /// Geometric cooling multiplier in (0, 1]. 1 disables cooling.
    pub delta: f64,

    /// Shaping exponent of the benefit function. Must be positive.
    pub alpha: f64,

    /// Greedy or simulated-annealing acceptance.
    pub acceptance: Acceptance,

    /// Maximum size of a uniform random candidate sample. At least 1; the
    /// sampler additionally caps it at the graph size minus one.
    pub uniform_sample_size: usize,

    /// Maximum size of a neighbor candidate sample. At least 1.
    pub neighbor_sample_size: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for JabejaConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            policy: SelectionPolicy::Hybrid,
            temperature: 2.0,
            delta: 0.95,
            alpha: 2.0,
            acceptance: Acceptance::Greedy,
            uniform_sample_size: 6,
            neighbor_sample_size: 3,
            seed: None,
        }
    }
}

impl JabejaConfig {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Switches to simulated-annealing acceptance with the given factor.
    pub fn with_simulated_annealing(mut self, factor: f64) -> Self {
        self.acceptance = Acceptance::SimulatedAnnealing { factor };
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_uniform_sample_size(mut self, n: usize) -> Self {
        self.uniform_sample_size = n;
        self
    }

    pub fn with_neighbor_sample_size(mut self, n: usize) -> Self {
        self.neighbor_sample_size = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every parameter domain. The runner rejects an invalid
    /// configuration before touching the graph.
    pub fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("rounds must be positive".into());
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(format!(
                "temperature must be positive, got {}",
                self.temperature
            ));
        }
        if !self.delta.is_finite() || self.delta <= 0.0 || self.delta > 1.0 {
            return Err(format!("delta must be in (0, 1], got {}", self.delta));
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(format!("alpha must be positive, got {}", self.alpha));
        }
        if let Acceptance::SimulatedAnnealing { factor } = self.acceptance {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(format!(
                    "simulated-annealing factor must be positive, got {factor}"
                ));
            }
        }
        if self.uniform_sample_size == 0 {
            return Err("uniform_sample_size must be at least 1".into());
        }
        if self.neighbor_sample_size == 0 {
            return Err("neighbor_sample_size must be at least 1".into());
        }
        Ok(())
    }
}
