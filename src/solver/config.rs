//! Solver configuration.

use crate::error::Result;
use crate::two_opt::TwoOptConfig;

/// Configuration for [`TourSolver`](super::TourSolver).
///
/// # Examples
///
/// ```
/// use u_geotour::solver::SolverConfig;
/// use u_geotour::two_opt::TwoOptConfig;
///
/// let config = SolverConfig::default()
///     .with_validate_coordinates(true)
///     .with_two_opt(TwoOptConfig::default().with_time_limit_ms(1_000));
/// assert!(config.improve);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Run 2-opt after nearest-neighbor construction.
    pub improve: bool,

    /// Reject non-finite or out-of-range coordinates before solving.
    ///
    /// Off by default: invalid coordinates then propagate as NaN lengths.
    pub validate_coordinates: bool,

    /// 2-opt parameters, used when `improve` is set.
    pub two_opt: TwoOptConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            improve: true,
            validate_coordinates: false,
            two_opt: TwoOptConfig::default(),
        }
    }
}

impl SolverConfig {
    /// Sets whether 2-opt runs after construction.
    pub fn with_improve(mut self, improve: bool) -> Self {
        self.improve = improve;
        self
    }

    /// Sets whether coordinates are checked before solving.
    pub fn with_validate_coordinates(mut self, validate: bool) -> Self {
        self.validate_coordinates = validate;
        self
    }

    /// Sets the 2-opt parameters.
    pub fn with_two_opt(mut self, two_opt: TwoOptConfig) -> Self {
        self.two_opt = two_opt;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.two_opt.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert!(config.improve);
        assert!(!config.validate_coordinates);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_two_opt_is_rejected() {
        let config =
            SolverConfig::default().with_two_opt(TwoOptConfig::default().with_max_passes(0));
        assert!(config.validate().is_err());
    }
}
