//! Colony parameters and run configuration.
//!
//! [`ColonyParams`] holds what the colony itself needs (α, β, ρ, Q).
//! [`AcoConfig`] adds the caller-side loop settings used by
//! [`AcoRunner`](super::AcoRunner): ant count, iteration budget, seed.

use crate::error::{AcoError, AcoResult};

/// Pheromone and heuristic weighting for an [`AntColony`](super::AntColony).
///
/// # Examples
///
/// ```
/// use ant_colony_tsp::aco::ColonyParams;
///
/// let params = ColonyParams::default().with_rho(0.5).with_beta(3.0);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.alpha, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColonyParams {
    /// Pheromone influence exponent (α). Typical range: 0.5–2.
    pub alpha: f64,

    /// Heuristic (inverse distance) influence exponent (β). Typical range: 1–5.
    pub beta: f64,

    /// Evaporation rate (ρ), strictly inside (0, 1).
    pub rho: f64,

    /// Deposit scale (Q). Each tour deposits `Q / cost` on its edges.
    pub q: f64,
}

impl Default for ColonyParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
            rho: 0.1,
            q: 100.0,
        }
    }
}

impl ColonyParams {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Validates the parameters.
    pub fn validate(&self) -> AcoResult<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::parameter(
                "alpha",
                format!("must be finite and non-negative, got {}", self.alpha),
            ));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::parameter(
                "beta",
                format!("must be finite and non-negative, got {}", self.beta),
            ));
        }
        // NaN fails both comparisons, so test the accepted range positively.
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(AcoError::parameter(
                "rho",
                format!("must be in (0, 1), got {}", self.rho),
            ));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(AcoError::parameter(
                "q",
                format!("must be finite and positive, got {}", self.q),
            ));
        }
        Ok(())
    }
}

/// Configuration for a full [`AcoRunner`](super::AcoRunner) run.
///
/// # Examples
///
/// ```
/// use ant_colony_tsp::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(10)
///     .with_iterations(50)
///     .with_rho(0.5)
///     .with_seed(42);
/// assert_eq!(config.ant_count, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Colony weighting parameters.
    pub colony: ColonyParams,

    /// Tours constructed per iteration.
    pub ant_count: usize,

    /// Number of iterations to run.
    pub iterations: usize,

    /// Iterations without a strictly better tour before stopping early.
    ///
    /// Set to 0 to disable stagnation-based termination (the default).
    pub stagnation_limit: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Whether to construct each iteration's tours in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way for a given seed.
    pub parallel: bool,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            colony: ColonyParams::default(),
            ant_count: 20,
            iterations: 100,
            stagnation_limit: 0,
            seed: None,
            parallel: false,
        }
    }
}

impl AcoConfig {
    pub fn with_colony(mut self, colony: ColonyParams) -> Self {
        self.colony = colony;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.colony.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.colony.beta = beta;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.colony.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.colony.q = q;
        self
    }

    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AcoResult<()> {
        self.colony.validate()?;
        if self.ant_count == 0 {
            return Err(AcoError::parameter("ant_count", "must be at least 1"));
        }
        if self.iterations == 0 {
            return Err(AcoError::parameter("iterations", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let p = ColonyParams::default();
        assert!((p.alpha - 1.0).abs() < 1e-10);
        assert!((p.beta - 2.0).abs() < 1e-10);
        assert!((p.rho - 0.1).abs() < 1e-10);
        assert!((p.q - 100.0).abs() < 1e-10);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let c = AcoConfig::default();
        assert_eq!(c.ant_count, 20);
        assert_eq!(c.iterations, 100);
        assert_eq!(c.stagnation_limit, 0);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_validate_rho_bounds() {
        for rho in [0.0, 1.0, -0.2, 1.5, f64::NAN] {
            let p = ColonyParams::default().with_rho(rho);
            assert!(
                matches!(p.validate(), Err(AcoError::InvalidParameter { name: "rho", .. })),
                "rho = {rho} should be rejected"
            );
        }
        assert!(ColonyParams::default().with_rho(0.999).validate().is_ok());
    }

    #[test]
    fn test_validate_q() {
        assert!(ColonyParams::default().with_q(0.0).validate().is_err());
        assert!(ColonyParams::default().with_q(-5.0).validate().is_err());
        assert!(ColonyParams::default()
            .with_q(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_exponents() {
        assert!(ColonyParams::default().with_alpha(-1.0).validate().is_err());
        assert!(ColonyParams::default()
            .with_beta(f64::NAN)
            .validate()
            .is_err());
        assert!(ColonyParams::default()
            .with_alpha(0.0)
            .with_beta(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_loop_settings() {
        assert!(AcoConfig::default().with_ant_count(0).validate().is_err());
        assert!(AcoConfig::default().with_iterations(0).validate().is_err());
        assert!(AcoConfig::default().with_rho(2.0).validate().is_err());
    }

    #[test]
    fn test_builder_routes_to_colony() {
        let c = AcoConfig::default()
            .with_alpha(2.0)
            .with_beta(3.0)
            .with_rho(0.5)
            .with_q(10.0)
            .with_stagnation_limit(5)
            .with_parallel(true);
        assert_eq!(
            c.colony,
            ColonyParams {
                alpha: 2.0,
                beta: 3.0,
                rho: 0.5,
                q: 10.0
            }
        );
        assert_eq!(c.stagnation_limit, 5);
        assert!(c.parallel);
    }
}
