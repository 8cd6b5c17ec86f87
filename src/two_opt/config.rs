//! 2-opt configuration.

use crate::error::{Error, Result};

/// How candidate moves are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Evaluation {
    /// O(1) delta over the four edges a reversal touches.
    #[default]
    Incremental,

    /// Apply the reversal and recompute the full tour length, O(N) per
    /// candidate. Kept as a reference for the incremental rule.
    FullRecompute,
}

/// Configuration for the 2-opt improver.
///
/// # Examples
///
/// ```
/// use u_geotour::two_opt::{Evaluation, TwoOptConfig};
///
/// let config = TwoOptConfig::default()
///     .with_epsilon(1e-9)
///     .with_max_passes(10_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.evaluation, Evaluation::Incremental);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct TwoOptConfig {
    /// Minimum shortening, in kilometers, for a move to be accepted.
    ///
    /// A strictly positive value guarantees termination under floating
    /// point rounding.
    pub epsilon: f64,

    /// Candidate scoring rule.
    pub evaluation: Evaluation,

    /// Maximum number of scans. `None` runs until a local optimum.
    pub max_passes: Option<usize>,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked at the start of each scan, so the actual runtime may exceed
    /// it by one scan.
    pub time_limit_ms: Option<u64>,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-10,
            evaluation: Evaluation::default(),
            max_passes: None,
            time_limit_ms: None,
        }
    }
}

impl TwoOptConfig {
    /// Sets the minimum shortening for an accepted move.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the candidate scoring rule.
    pub fn with_evaluation(mut self, evaluation: Evaluation) -> Self {
        self.evaluation = evaluation;
        self
    }

    /// Sets the maximum number of scans.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = Some(n);
        self
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(Error::invalid_config(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        if self.max_passes == Some(0) {
            return Err(Error::invalid_config("max_passes must be positive or None"));
        }
        if self.time_limit_ms == Some(0) {
            return Err(Error::invalid_config(
                "time_limit_ms must be positive or None",
            ));
        }
        Ok(())
    }
}
